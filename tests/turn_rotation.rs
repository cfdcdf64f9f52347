use liars_dice::game::{Game, GameError, MoveKind, MoveSet};
use liars_dice::player::DICE_PER_PLAYER;
use proptest::prelude::*;

#[test]
fn new_game_deals_five_dice_to_every_player() {
    for n in 2..=10 {
        let game = Game::seeded(n, n as u64).unwrap();
        assert_eq!(game.players().len(), n);
        for (i, p) in game.players().iter().enumerate() {
            assert_eq!(p.id(), i);
            assert_eq!(p.len(), DICE_PER_PLAYER);
            assert!(p.faces().iter().all(|f| (1..=6).contains(f)));
        }
    }
}

#[test]
fn fewer_than_two_players_is_rejected() {
    assert_eq!(Game::new(1).unwrap_err(), GameError::InvalidPlayerCount { min: 2, got: 1 });
    assert!(matches!(Game::seeded(0, 1), Err(GameError::InvalidPlayerCount { .. })));
}

#[test]
fn claims_rotate_turn_and_wrap_to_first_seat() {
    let mut game = Game::seeded(3, 17).unwrap();
    for round in 0..2 {
        for p in 0..3 {
            let out = game.claim(p, round * 3 + p + 1, 2).unwrap();
            assert_eq!(out.next, (p + 1) % 3);
            assert_eq!(game.current(), (p + 1) % 3);
        }
    }
    assert_eq!(game.current(), 0);
}

#[test]
fn move_by_wrong_player_fails() {
    let mut game = Game::seeded(4, 2).unwrap();
    for p in 1..4 {
        assert_eq!(
            game.move_dice(p, 1, 0),
            Err(GameError::NotPlayersTurn { current: 0, got: p })
        );
    }
    // seat ids outside the table are never the current turn
    assert!(matches!(game.move_dice(9, 1, 0), Err(GameError::NotPlayersTurn { .. })));
}

#[test]
fn legal_moves_follow_move_claim_protocol() {
    let mut game = Game::seeded(2, 8).unwrap();
    assert_eq!(game.legal_moves(), MoveSet::OPENING);
    game.move_dice(0, 3, 0).unwrap();
    assert_eq!(game.legal_moves(), MoveSet::AFTER_MOVE);
    assert!(matches!(
        game.move_dice(0, 3, 0),
        Err(GameError::IllegalMove { kind: MoveKind::Move, .. })
    ));
    game.claim(0, 1, 3).unwrap();
    assert_eq!(game.legal_moves(), MoveSet::AFTER_CLAIM);
    assert!(!game.legal_moves().is_empty());
}

proptest! {
    #[test]
    fn claim_sequences_rotate_turn_and_never_lower_the_bid(
        n in 2usize..=10,
        seed in any::<u64>(),
        raises in proptest::collection::vec((0usize..=2, 1u8..=6), 1..40),
    ) {
        let mut game = Game::seeded(n, seed).unwrap();
        let mut last = 0;
        for (raise, face) in raises {
            let p = game.current();
            let out = game.claim(p, last + raise, face).unwrap();
            prop_assert_eq!(out.next, (p + 1) % n);
            prop_assert_eq!(game.current(), (p + 1) % n);
            let count = game.current_bid().unwrap().count;
            prop_assert!(count >= last);
            last = count;
        }
    }

    #[test]
    fn lower_claims_are_rejected_without_moving_the_turn(
        n in 2usize..=10,
        seed in any::<u64>(),
        count in 1usize..=30,
        drop in 1usize..=30,
    ) {
        let mut game = Game::seeded(n, seed).unwrap();
        game.claim(0, count, 4).unwrap();
        let lower = count.saturating_sub(drop);
        prop_assert_eq!(
            game.claim(1, lower, 4),
            Err(GameError::BidNotHighEnough { current: count, got: lower })
        );
        prop_assert_eq!(game.current(), 1);
        prop_assert_eq!(game.current_bid().map(|b| b.count), Some(count));
    }
}
