//! liars-dice: Liar's Dice rules engine
//!
//! Goals:
//! - Explicit game state: no globals, any number of independent games
//! - Injected randomness so every game can be replayed from a seed
//! - No panics for invalid input; use `Result` for rejected moves
//!
//! ## Quick start: a claim and a challenge
//! ```
//! use liars_dice::game::Game;
//!
//! let mut game = Game::seeded(3, 42).unwrap();
//! let claim = game.claim(0, 2, 5).unwrap();
//! assert_eq!(claim.next, 1);
//! assert!(claim.odds > 0.0 && claim.odds < 1.0);
//!
//! let result = game.challenge(1).unwrap();
//! assert_eq!(result.challenged, 0);
//! assert_eq!(result.challenger_wins, result.actual < 2);
//! ```
//!
//! ## TUI
//! Run the hot-seat TUI with:
//! ```sh
//! cargo run --bin liars-dice
//! ```

pub mod die;
pub mod engine;
pub mod game;
pub mod odds;
pub mod player;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
