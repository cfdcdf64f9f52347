use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use liars_dice::tui::{app::AppState, controller};
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::str::FromStr;
use std::time::Duration;

/// Writes log records to the file named by `LIARS_DICE_LOG`, if set.
/// Stderr is not used: it would draw over the alternate screen.
fn init_logging() -> io::Result<()> {
    let Ok(path) = std::env::var("LIARS_DICE_LOG") else {
        return Ok(());
    };
    let level = std::env::var("LIARS_DICE_LOG_LEVEL")
        .ok()
        .and_then(|s| LevelFilter::from_str(&s).ok())
        .unwrap_or(LevelFilter::Info);
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(io::Error::other)
}

fn seed_from_env() -> u64 {
    std::env::var("LIARS_DICE_SEED").ok().and_then(|s| s.parse().ok()).unwrap_or(0)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        eprintln!("liars-dice {}: stdout is not a terminal, nothing to draw", liars_dice::VERSION);
        return Ok(());
    }
    init_logging()?;
    let mut app = AppState::new(seed_from_env())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
