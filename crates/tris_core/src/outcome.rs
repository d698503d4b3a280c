//! Session status and move results.
//!
//! A [`MoveResult`] is everything an adapter needs to describe what a move
//! did, so it never has to query the session afterwards to find out.

use super::rules::Line;
use super::types::{Mark, Player};
use serde::{Deserialize, Serialize};

/// Current status of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// A mark filled a triple.
    Won(Mark),
    /// The board filled with no winner.
    Tied,
}

impl GameStatus {
    /// Won or tied.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum InvalidMove {
    /// Index is not between 0 and 8.
    #[display("No cell at index {}", _0)]
    OutOfRange(usize),

    /// Cell already holds a mark.
    #[display("Cell {} is already taken", _0)]
    Occupied(usize),
}

impl InvalidMove {
    /// Index the move targeted.
    pub fn index(self) -> usize {
        match self {
            InvalidMove::OutOfRange(index) | InvalidMove::Occupied(index) => index,
        }
    }
}

impl std::error::Error for InvalidMove {}

/// Result of [`GameSession::play_move`](crate::GameSession::play_move).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// Move accepted; the other player is now to move.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// Move accepted and completed a triple.
    Win {
        /// Player who made the winning move.
        winner: Player,
        /// The completed triple.
        line: Line,
    },
    /// Move accepted and filled the board with no winner.
    Tie,
    /// Move refused; nothing changed.
    Invalid {
        /// Why the move was refused.
        reason: InvalidMove,
        /// Player still to move.
        current: Player,
    },
    /// Session is already won or tied; nothing changed.
    GameOver,
}

impl MoveResult {
    /// Returns true if the session is terminal after this result.
    pub fn ends_game(&self) -> bool {
        matches!(self, MoveResult::Win { .. } | MoveResult::Tie)
    }
}
