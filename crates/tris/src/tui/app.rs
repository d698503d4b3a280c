//! Application state and key handling.

use super::input::{digit_to_index, move_cursor};
use crate::status;
use crossterm::event::KeyCode;
use tracing::{debug, instrument};
use tris_core::{GameSession, Line, MoveResult, Position};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading keys.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    winning_line: Option<Line>,
}

impl App {
    /// Creates the application around a fresh session.
    pub fn new(session: GameSession) -> Self {
        let status_message = status::idle(&session);
        Self {
            session,
            cursor: Position::Center,
            status_message,
            winning_line: None,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the completed triple, once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.cursor = Position::from_index(index).unwrap_or(self.cursor);
                    self.play(index);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Plays at `index` unless the game is already over.
    fn play(&mut self, index: usize) {
        if self.session.is_over() {
            debug!(index, "Ignoring cell input, game is over");
            return;
        }

        let result = self.session.play_move(index);
        debug!(?result, "Move played");
        if let MoveResult::Win { line, .. } = &result {
            self.winning_line = Some(*line);
        }
        self.status_message = status::describe(&result);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.winning_line = None;
        self.status_message = status::idle(&self.session);
    }
}
