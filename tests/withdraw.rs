use liars_dice::game::{Game, GameError};
use liars_dice::player::Player;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn insufficient_dice_leaves_hand_and_game_unchanged() {
    let hands: [&[u8]; 2] = [&[3, 3, 1, 2, 6], &[5, 5, 5, 5, 5]];
    let mut game = Game::from_hands(&hands, ChaCha8Rng::seed_from_u64(1)).unwrap();
    let before = game.status();
    let err = game.move_dice(0, 3, 3).unwrap_err();
    assert_eq!(err, GameError::InsufficientDice { player: 0, face: 3, requested: 3, available: 2 });
    assert!(!err.is_illegal_move());
    assert_eq!(game.status(), before);
}

#[test]
fn moved_dice_change_owner() {
    let hands: [&[u8]; 2] = [&[3, 3, 1, 2, 6], &[5, 5, 5, 5, 5]];
    let mut game = Game::from_hands(&hands, ChaCha8Rng::seed_from_u64(1)).unwrap();
    game.move_dice(0, 3, 2).unwrap();
    assert_eq!(game.status().table, vec![3, 3]);
    assert_eq!(game.players()[0].faces(), vec![1, 2, 6]);
    let total: usize = game.players().iter().map(Player::len).sum::<usize>() + game.table().len();
    assert_eq!(total, 10);
}

proptest! {
    #[test]
    fn withdraw_is_all_or_nothing(
        faces in proptest::collection::vec(1u8..=6, 0..=5),
        face in 1u8..=6,
        count in 0usize..=5,
    ) {
        let mut p = Player::from_faces(0, &faces).unwrap();
        let available = p.count_of_value(face);
        match p.withdraw(face, count) {
            Ok(taken) => {
                prop_assert!(count <= available);
                prop_assert_eq!(taken.len(), count);
                prop_assert!(taken.iter().all(|d| d.face() == face));
                prop_assert_eq!(p.len() + count, faces.len());
                prop_assert_eq!(p.count_of_value(face), available - count);
            }
            Err(_) => {
                prop_assert!(count > available);
                prop_assert_eq!(p.faces(), faces);
            }
        }
    }
}
