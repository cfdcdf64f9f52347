use liars_dice::game::{Game, HistoryEvent, MoveKind};

#[test]
fn history_records_moves_claims_and_challenges() {
    let mut game = Game::seeded(2, 3).unwrap();
    game.move_dice(0, 1, 0).unwrap();
    game.claim(0, 2, 4).unwrap();
    game.challenge(1).unwrap();

    let history = game.history_recent(10);
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].player, 0);
    assert_eq!(history[0].event, HistoryEvent::Moved { face: 1, count: 0 });
    assert_eq!(history[1].event.kind(), MoveKind::Claim);
    assert!(matches!(history[2].event, HistoryEvent::Challenged { against: 0, .. }));
    assert_eq!(history[2].player, 1);
}

#[test]
fn rejected_operations_are_not_recorded() {
    let mut game = Game::seeded(2, 3).unwrap();
    let _ = game.claim(1, 1, 1);
    let _ = game.challenge(0);
    assert_eq!(game.history_len(), 0);
}

#[test]
fn history_offset_pages_from_the_end() {
    let mut game = Game::seeded(2, 3).unwrap();
    for i in 0..8 {
        game.claim(i % 2, i + 1, 2).unwrap();
    }
    assert_eq!(game.history_len(), 8);
    let window = game.history_recent_offset(3, 0);
    assert_eq!(window.len(), 3);
    let older = game.history_recent_offset(3, 2);
    assert_eq!(older.len(), 3);
    assert_ne!(window[0], older[0]);
    assert!(game.history_recent(0).is_empty());
}
