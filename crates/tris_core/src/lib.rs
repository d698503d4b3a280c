//! Tris core - tic-tac-toe board, rules and session state machine.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid, with a single mutating entry point
//! - **Rules**: pure win and tie detection over a board snapshot
//! - **Session**: turn order and outcome, driven one move at a time
//!
//! # Example
//!
//! ```
//! use tris_core::{GameSession, Mark, MoveResult};
//!
//! let mut session = GameSession::default();
//! for index in [0, 4, 1, 5] {
//!     assert!(matches!(session.play_move(index), MoveResult::Continue { .. }));
//! }
//! match session.play_move(2) {
//!     MoveResult::Win { winner, .. } => assert_eq!(*winner.mark(), Mark::X),
//!     other => panic!("expected a win, got {other:?}"),
//! }
//! assert!(session.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod session;
mod types;

pub use board::{BOARD_SIZE, Board};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, SessionInvariants,
    StatusConsistentInvariant,
};
pub use outcome::{GameStatus, InvalidMove, MoveResult};
pub use position::Position;
pub use rules::{Line, TRIPLES};
pub use session::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameSession};
pub use types::{Cell, Mark, Player};
