//! Win detection logic for tic-tac-toe.

use super::super::board::BOARD_SIZE;
use super::super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in scan order.
pub const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// A completed triple: the mark that filled it and its cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Mark occupying all three cells.
    pub mark: Mark,
    /// Cell indices in ascending order.
    pub cells: [usize; 3],
}

impl Line {
    /// Returns true if `index` is one of the three cells.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Returns the first triple, in [`TRIPLES`] order, filled by a single mark.
#[instrument(skip(cells))]
pub fn winning_line(cells: &[Cell; BOARD_SIZE]) -> Option<Line> {
    TRIPLES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(Line {
            mark,
            cells: [a, b, c],
        }),
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark fills any triple, `None` otherwise.
#[instrument(skip(cells))]
pub fn check_winner(cells: &[Cell; BOARD_SIZE]) -> Option<Mark> {
    winning_line(cells).map(|line| line.mark)
}
