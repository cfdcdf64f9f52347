use crate::die::{MAX_FACE, MIN_FACE};
use crate::engine::{Action, ActionReport, DiceEngine};
use crate::game::{Game, GameError, HistoryEvent, MoveKind};
use crate::player::DICE_PER_PLAYER;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    Restart,
    ToggleReveal,
    OpenMove,
    OpenClaim,
    Challenge,
    EntryFaceUp,
    EntryFaceDown,
    EntryCountInc,
    EntryCountDec,
    EntryDigit(u8),
    EntryBackspace,
    EntrySubmit,
    EntryCancel,
}

/// A move or claim being composed by the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub kind: MoveKind,
    pub face: u8,
    pub count: usize,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core game engine instance
    pub game: Game,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_num_players: usize,
    pub cfg_seed: u64,
    pub cfg_reveal: bool,
    /// Seed the running game was dealt from; 0 means OS-seeded.
    pub seed: u64,
    /// Show every hand, not just the acting player's.
    pub reveal: bool,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    entry: Option<Entry>,
    entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
    last_report: Option<String>,
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    pub const DEFAULT_PLAYERS: usize = 4;
    pub const MAX_PLAYERS: usize = 10;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Builds the app with a dealt game; `seed` 0 deals from OS entropy.
    pub fn new(seed: u64) -> Result<Self, GameError> {
        let game = Self::deal(Self::DEFAULT_PLAYERS, seed)?;
        Ok(Self {
            scene: Scene::Menu,
            game,
            menu_index: 0,
            cfg_num_players: Self::DEFAULT_PLAYERS,
            cfg_seed: seed,
            cfg_reveal: false,
            seed,
            reveal: false,
            help_open: false,
            history_open: false,
            history_offset: 0,
            entry: None,
            entry_error: None,
            action_error: None,
            action_error_at: None,
            last_report: None,
        })
    }

    pub(crate) fn deal(players: usize, seed: u64) -> Result<Game, GameError> {
        if seed == 0 {
            Game::new(players)
        } else {
            Game::seeded(players, seed)
        }
    }

    fn can_act(&self) -> bool {
        self.scene == Scene::Table && !self.help_open && !self.history_open
    }

    pub fn entry(&self) -> Option<Entry> {
        self.entry
    }

    pub fn entry_active(&self) -> bool {
        self.entry.is_some()
    }

    pub fn entry_error(&self) -> Option<&str> {
        self.entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// Narrative of the last claim, move or challenge.
    pub fn last_report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }

    fn set_action_error(&mut self, err: &GameError) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    /// Whether `seat`'s hand should be drawn face up.
    pub fn hand_visible(&self, seat: usize) -> bool {
        if self.reveal || seat == self.game.current() {
            return true;
        }
        matches!(
            self.game.history_recent(1).first().map(|e| e.event),
            Some(HistoryEvent::Challenged { .. })
        )
    }

    fn max_entry_count(&self, kind: MoveKind) -> usize {
        match kind {
            MoveKind::Move => DICE_PER_PLAYER,
            _ => self.game.total_dice(),
        }
    }

    fn open_entry(&mut self, kind: MoveKind) -> bool {
        if !self.can_act() {
            return false;
        }
        if !self.game.legal_moves().contains(kind) {
            self.set_action_error(&GameError::IllegalMove {
                kind,
                allowed: self.game.legal_moves(),
            });
            return false;
        }
        let bid = self.game.current_bid();
        let face = bid.map(|b| b.face).unwrap_or(MIN_FACE);
        let count = match kind {
            MoveKind::Claim => bid.map(|b| b.count).unwrap_or(1),
            _ => 1,
        };
        self.entry = Some(Entry { kind, face, count });
        self.entry_error = None;
        true
    }

    fn entry_adjust_face(&mut self, up: bool) {
        if let Some(e) = self.entry.as_mut() {
            e.face = match (up, e.face) {
                (true, MAX_FACE) => MIN_FACE,
                (true, f) => f + 1,
                (false, MIN_FACE) => MAX_FACE,
                (false, f) => f - 1,
            };
        }
        self.entry_error = None;
    }

    fn entry_adjust_count(&mut self, delta: isize) {
        let Some(kind) = self.entry.map(|e| e.kind) else {
            return;
        };
        let max = self.max_entry_count(kind);
        if let Some(e) = self.entry.as_mut() {
            e.count = e.count.saturating_add_signed(delta).min(max);
        }
        self.entry_error = None;
    }

    fn entry_push_digit(&mut self, digit: u8) {
        let Some(kind) = self.entry.map(|e| e.kind) else {
            return;
        };
        let max = self.max_entry_count(kind);
        if let Some(e) = self.entry.as_mut() {
            let next = e.count.saturating_mul(10).saturating_add(usize::from(digit));
            e.count = if next > max { usize::from(digit).min(max) } else { next };
        }
        self.entry_error = None;
    }

    fn entry_backspace(&mut self) {
        if let Some(e) = self.entry.as_mut() {
            e.count /= 10;
        }
        self.entry_error = None;
    }

    fn entry_submit(&mut self) -> bool {
        let Some(e) = self.entry else {
            return false;
        };
        let action = match e.kind {
            MoveKind::Move => Action::Move { face: e.face, count: e.count },
            _ => Action::Claim { count: e.count, face: e.face },
        };
        match self.perform(action) {
            Ok(()) => {
                self.entry = None;
                self.entry_error = None;
                true
            }
            Err(err) => {
                self.entry_error = Some(err.to_string());
                false
            }
        }
    }

    fn entry_cancel(&mut self) {
        self.entry = None;
        self.entry_error = None;
    }

    /// Applies `action` for the seat whose turn it is.
    fn perform(&mut self, action: Action) -> Result<(), GameError> {
        let seat = self.game.current();
        let report = self.game.act(seat, action)?;
        self.clear_action_error();
        self.last_report = Some(match report {
            ActionReport::Moved => match action {
                Action::Move { face, count } => {
                    format!("Player {seat} moves {count} x {face} to the table")
                }
                _ => format!("Player {seat} moves"),
            },
            ActionReport::Claimed(c) => c.to_string(),
            ActionReport::Challenged(c) => c.to_string(),
        });
        Ok(())
    }

    fn challenge(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        match self.perform(Action::Challenge) {
            Ok(()) => true,
            Err(err) => {
                self.set_action_error(&err);
                false
            }
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Restart => {
                if self.scene == Scene::Table {
                    return self.restart();
                }
                false
            }
            InputAction::ToggleReveal => {
                if self.scene == Scene::Table {
                    self.reveal = !self.reveal;
                }
                false
            }
            InputAction::OpenMove => self.open_entry(MoveKind::Move),
            InputAction::OpenClaim => self.open_entry(MoveKind::Claim),
            InputAction::Challenge => self.challenge(),
            InputAction::EntryFaceUp => {
                self.entry_adjust_face(true);
                false
            }
            InputAction::EntryFaceDown => {
                self.entry_adjust_face(false);
                false
            }
            InputAction::EntryCountInc => {
                self.entry_adjust_count(1);
                false
            }
            InputAction::EntryCountDec => {
                self.entry_adjust_count(-1);
                false
            }
            InputAction::EntryDigit(d) => {
                self.entry_push_digit(d);
                false
            }
            InputAction::EntryBackspace => {
                self.entry_backspace();
                false
            }
            InputAction::EntrySubmit => self.entry_submit(),
            InputAction::EntryCancel => {
                self.entry_cancel();
                false
            }
        }
    }

    /// Deals a fresh game with the same number of players.
    pub fn restart(&mut self) -> bool {
        let n = self.game.num_players();
        match self.game.restart(n) {
            Ok(()) => {
                self.restart_view();
                true
            }
            Err(err) => {
                self.set_action_error(&err);
                false
            }
        }
    }

    pub(crate) fn restart_view(&mut self) {
        self.history_offset = 0;
        self.entry = None;
        self.entry_error = None;
        self.last_report = None;
        self.clear_action_error();
    }

    /// Periodic housekeeping: expire stale error messages.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
