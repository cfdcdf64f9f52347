// Minimal game engine API boundary. This trait exposes the Liar's Dice
// protocol and read-only queries so UIs (TUI, tests, scripted drivers) can
// drive a game without depending on its internals. It is implemented for the
// core `Game` type.

use crate::game::{
    Bid, ChallengeOutcome, ClaimOutcome, Game, GameError, GameStatus, MoveKind, MoveSet,
};
use rand::Rng;

/// Seat-level action intents, typically produced by a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Move { face: u8, count: usize },
    Claim { count: usize, face: u8 },
    Challenge,
}

impl Action {
    pub fn kind(self) -> MoveKind {
        match self {
            Action::Move { .. } => MoveKind::Move,
            Action::Claim { .. } => MoveKind::Claim,
            Action::Challenge => MoveKind::Challenge,
        }
    }
}

/// What an applied action produced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ActionReport {
    Moved,
    Claimed(ClaimOutcome),
    Challenged(ChallengeOutcome),
}

pub trait DiceEngine {
    // Game lifecycle
    fn restart(&mut self, player_count: usize) -> Result<(), GameError>;

    // Player actions
    fn move_dice(&mut self, player: usize, face: u8, count: usize) -> Result<(), GameError>;
    fn claim(&mut self, player: usize, count: usize, face: u8) -> Result<ClaimOutcome, GameError>;
    fn challenge(&mut self, player: usize) -> Result<ChallengeOutcome, GameError>;

    // Queries
    fn current(&self) -> usize;
    fn legal_moves(&self) -> MoveSet;
    fn current_bid(&self) -> Option<Bid>;
    fn num_players(&self) -> usize;
    fn total_dice(&self) -> usize;
    fn status(&self) -> GameStatus;

    /// Applies `action` on behalf of `player`.
    fn act(&mut self, player: usize, action: Action) -> Result<ActionReport, GameError> {
        match action {
            Action::Move { face, count } => {
                self.move_dice(player, face, count).map(|()| ActionReport::Moved)
            }
            Action::Claim { count, face } => {
                self.claim(player, count, face).map(ActionReport::Claimed)
            }
            Action::Challenge => self.challenge(player).map(ActionReport::Challenged),
        }
    }
}

impl<R: Rng> DiceEngine for Game<R> {
    fn restart(&mut self, player_count: usize) -> Result<(), GameError> {
        self.restart(player_count)
    }

    fn move_dice(&mut self, player: usize, face: u8, count: usize) -> Result<(), GameError> {
        self.move_dice(player, face, count)
    }
    fn claim(&mut self, player: usize, count: usize, face: u8) -> Result<ClaimOutcome, GameError> {
        self.claim(player, count, face)
    }
    fn challenge(&mut self, player: usize) -> Result<ChallengeOutcome, GameError> {
        self.challenge(player)
    }

    fn current(&self) -> usize {
        self.current
    }
    fn legal_moves(&self) -> MoveSet {
        self.legal
    }
    fn current_bid(&self) -> Option<Bid> {
        self.bid
    }
    fn num_players(&self) -> usize {
        self.players.len()
    }
    fn total_dice(&self) -> usize {
        Game::total_dice(self)
    }
    fn status(&self) -> GameStatus {
        Game::status(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn act_dispatches_through_trait_object() {
        let mut game = Game::seeded(3, 5).unwrap();
        let engine: &mut dyn DiceEngine = &mut game;
        let report = engine.act(0, Action::Claim { count: 2, face: 4 }).unwrap();
        assert!(matches!(report, ActionReport::Claimed(c) if c.next == 1));
        assert_eq!(engine.current(), 1);
        let report = engine.act(1, Action::Challenge).unwrap();
        assert!(matches!(report, ActionReport::Challenged(c) if c.challenged == 0));
    }

    #[test]
    fn act_propagates_errors() {
        let mut game = Game::seeded(2, 5).unwrap();
        let err = game.act(1, Action::Challenge).unwrap_err();
        assert_eq!(err, GameError::NotPlayersTurn { current: 0, got: 1 });
        assert_eq!(Action::Challenge.kind(), MoveKind::Challenge);
    }
}
