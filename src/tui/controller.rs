use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Applies a key press to `app`; returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.scene == Scene::Menu && !app.entry_active() && matches!(code, KeyCode::Char('q' | 'Q')) {
        return true;
    }
    if let Some(action) = action_for(app, code) {
        let _ = app.handle_input(action);
    }
    false
}

/// Resolves a key against whatever currently has focus: the entry box,
/// then the help and history overlays, then the scene itself.
fn action_for(app: &AppState, code: KeyCode) -> Option<InputAction> {
    use InputAction as A;

    let inc = matches!(code, KeyCode::Char('+' | '=') | KeyCode::Right);
    let dec = matches!(code, KeyCode::Char('-' | '_') | KeyCode::Left);

    if app.entry_active() {
        return match code {
            KeyCode::Esc => Some(A::EntryCancel),
            KeyCode::Enter => Some(A::EntrySubmit),
            KeyCode::Up => Some(A::EntryFaceUp),
            KeyCode::Down => Some(A::EntryFaceDown),
            KeyCode::Backspace => Some(A::EntryBackspace),
            KeyCode::Char(c) if c.is_ascii_digit() => Some(A::EntryDigit(c as u8 - b'0')),
            _ if inc => Some(A::EntryCountInc),
            _ if dec => Some(A::EntryCountDec),
            _ => None,
        };
    }

    let at_table = app.scene == Scene::Table;
    match code {
        KeyCode::Char('?') if at_table => return Some(A::ToggleHelp),
        KeyCode::Char('h' | 'H') if at_table => return Some(A::ToggleHistory),
        _ => {}
    }
    if app.help_open() {
        return (code == KeyCode::Esc).then_some(A::ToggleHelp);
    }
    if app.history_open() {
        return match code {
            KeyCode::Up => Some(A::HistoryUp),
            KeyCode::Down => Some(A::HistoryDown),
            KeyCode::Esc => Some(A::ToggleHistory),
            _ => None,
        };
    }

    match (app.scene, code) {
        (Scene::Menu, KeyCode::Up) => Some(A::MenuPrev),
        (Scene::Menu, KeyCode::Down) => Some(A::MenuNext),
        (Scene::Menu, KeyCode::Enter) => Some(A::MenuApply),
        (Scene::Menu, KeyCode::Esc) => Some(A::MenuCancel),
        (Scene::Menu, _) if inc => Some(A::MenuInc),
        (Scene::Menu, _) if dec => Some(A::MenuDec),
        (Scene::Table, KeyCode::Esc) => Some(A::ToggleMenu),
        (Scene::Table, KeyCode::Char('m' | 'M')) => Some(A::OpenMove),
        (Scene::Table, KeyCode::Char('c' | 'C')) => Some(A::OpenClaim),
        (Scene::Table, KeyCode::Char('x' | 'X')) => Some(A::Challenge),
        (Scene::Table, KeyCode::Char('v' | 'V')) => Some(A::ToggleReveal),
        (Scene::Table, KeyCode::Char(' ')) => Some(A::Restart),
        _ => None,
    }
}
