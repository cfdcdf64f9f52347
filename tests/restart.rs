use liars_dice::game::{Game, GameError, MoveSet};

#[test]
fn restart_discards_everything() {
    let mut game = Game::seeded(3, 12).unwrap();
    game.move_dice(0, 1, 0).unwrap();
    game.claim(0, 2, 5).unwrap();
    game.challenge(1).unwrap();

    game.restart(5).unwrap();
    assert_eq!(game.players().len(), 5);
    assert!(game.players().iter().all(|p| p.len() == 5));
    assert_eq!(game.current(), 0);
    assert_eq!(game.legal_moves(), MoveSet::OPENING);
    assert!(game.current_bid().is_none());
    assert!(game.table().is_empty());
    assert!(game.last_challenge().is_none());
    assert_eq!(game.history_len(), 0);
    assert_eq!(game.total_dice(), 25);
}

#[test]
fn rejected_restart_keeps_the_running_game() {
    let mut game = Game::seeded(3, 12).unwrap();
    game.claim(0, 2, 5).unwrap();
    let before = game.status();
    assert_eq!(game.restart(1), Err(GameError::InvalidPlayerCount { min: 2, got: 1 }));
    assert_eq!(game.status(), before);
}

#[test]
fn independent_games_do_not_share_state() {
    let mut a = Game::seeded(2, 1).unwrap();
    let b = Game::seeded(2, 1).unwrap();
    a.claim(0, 1, 1).unwrap();
    assert_eq!(b.current(), 0);
    assert!(b.current_bid().is_none());
}
