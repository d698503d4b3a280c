//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. The session composes them after
//! every accepted move; the invariant checks reuse them to cross-check
//! the session's stored status.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{Line, TRIPLES, check_winner, winning_line};
