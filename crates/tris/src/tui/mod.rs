//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};

use crate::config::TrisConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal in raw mode on the alternate screen and restores it
/// when dropped, including on early returns and panics.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // Guard exists from here on so a failed screen switch still leaves raw mode
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even if an earlier one fails; the first error wins.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

/// Runs the terminal UI until the player quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TrisConfig) -> Result<()> {
    info!("Starting Tris TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config.new_session());
    let result = event_loop(&mut terminal, &mut app);
    if let Err(e) = &result {
        error!(error = %e, "TUI event loop failed");
    }

    drop(guard);
    info!("TUI exited");
    result
}

fn event_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            return Ok(());
        }
    }
}
