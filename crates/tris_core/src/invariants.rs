//! First-class invariants for a tic-tac-toe session.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The session checks them in debug builds; they can also be tested
//! independently.

use super::outcome::GameStatus;
use super::rules;
use super::session::GameSession;
use super::types::Mark;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: marks alternate, X first.
///
/// X has placed as many marks as O, or one more. While the game is in
/// progress the side to move follows from that count.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let cells = session.board_snapshot();
        let count = |mark: Mark| cells.iter().filter(|cell| cell.mark() == Some(mark)).count();
        let (xs, os) = (count(Mark::X), count(Mark::O));

        let balanced = xs == os || xs == os + 1;
        let to_move = if xs == os { Mark::X } else { Mark::O };

        balanced && (session.is_over() || *session.current_player().mark() == to_move)
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// Invariant: stored status agrees with the rules applied to the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameSession> for StatusConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let cells = session.board_snapshot();
        let expected = match rules::check_winner(&cells) {
            Some(mark) => GameStatus::Won(mark),
            None if rules::is_full(&cells) => GameStatus::Tied,
            None => GameStatus::InProgress,
        };
        session.status() == expected
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (MarkBalanceInvariant, StatusConsistentInvariant);

/// Checks every session invariant, logging and asserting on violation.
#[cfg(debug_assertions)]
pub(super) fn assert_invariants(session: &GameSession) {
    if let Err(violations) = SessionInvariants::check_all(session) {
        for violation in &violations {
            tracing::error!(%violation, "Session invariant violated");
        }
        debug_assert!(violations.is_empty(), "{violations:?}");
    }
}
