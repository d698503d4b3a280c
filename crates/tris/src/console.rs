//! Line-oriented front end.
//!
//! Reads one command per line and answers with the board and a status
//! line. Works over any reader/writer pair, so tests drive it with
//! in-memory buffers.

use crate::status;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use tris_core::{GameSession, Position};

/// Help text shown for unrecognised input.
pub const USAGE: &str = "Type a cell (0-8 or a name like 'center'), 'reset' or 'quit'.";

/// Hint printed once after the move that ends a game.
pub const PLAY_AGAIN: &str = "Type 'reset' to play again.";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the current player's mark at an index.
    Play(usize),
    /// Start a new game.
    Reset,
    /// Leave the loop.
    Quit,
    /// Blank line.
    Nothing,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses one input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Nothing;
        }
        if let Ok(index) = line.parse::<usize>() {
            return Command::Play(index);
        }
        match line.to_lowercase().as_str() {
            "r" | "reset" | "restart" => Command::Reset,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Position::from_label_or_number(line)
                .map(|pos| Command::Play(pos.to_index()))
                .unwrap_or_else(|| Command::Unknown(line.to_string())),
        }
    }
}

/// Runs the loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(session: &mut GameSession, input: R, mut output: W) -> Result<()> {
    info!("Starting console session");
    render(&mut output, session, &status::idle(session))?;

    for line in input.lines() {
        let line = line?;
        let command = Command::parse(&line);
        debug!(?command, "Console command");

        match command {
            Command::Play(index) => {
                let result = session.play_move(index);
                render(&mut output, session, &status::describe(&result))?;
                if result.ends_game() {
                    info!(status = ?session.status(), "Console game finished");
                    writeln!(output, "{PLAY_AGAIN}")?;
                }
            }
            Command::Reset => {
                session.reset();
                render(&mut output, session, &status::idle(session))?;
            }
            Command::Quit => break,
            Command::Nothing => {}
            Command::Unknown(text) => {
                writeln!(output, "Unknown command '{text}'. {USAGE}")?;
            }
        }
    }

    info!("Console session ended");
    output.flush()?;
    Ok(())
}

fn render<W: Write>(output: &mut W, session: &GameSession, status: &str) -> Result<()> {
    writeln!(output, "{}", session.board())?;
    writeln!(output, "{status}")?;
    writeln!(output)?;
    Ok(())
}
