//! Tie detection logic for tic-tac-toe.

use super::super::board::BOARD_SIZE;
use super::super::types::Cell;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(cells))]
pub fn is_full(cells: &[Cell; BOARD_SIZE]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}

/// A full board with no winner.
#[instrument(skip(cells))]
pub fn is_tie(cells: &[Cell; BOARD_SIZE]) -> bool {
    is_full(cells) && check_winner(cells).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[E; BOARD_SIZE]));
        assert!(!is_tie(&[E; BOARD_SIZE]));
    }

    #[test]
    fn test_partial_board_not_full() {
        let cells = [X, O, X, E, E, E, E, E, E];
        assert!(!is_full(&cells));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / X O O / O X X
        let cells = [X, O, X, X, O, O, O, X, X];
        assert!(is_full(&cells));
        assert!(is_tie(&cells));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        // X X X / O O X / X O O
        let cells = [X, X, X, O, O, X, X, O, O];
        assert!(is_full(&cells));
        assert!(!is_tie(&cells));
    }
}
