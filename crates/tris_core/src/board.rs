//! The 3x3 grid.

use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order: index `i` sits at row `i / 3`,
/// column `i % 3`. An occupied cell only returns to empty through
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an owned copy of all nine cells.
    pub fn snapshot(&self) -> [Cell; BOARD_SIZE] {
        self.cells
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places `mark` at `index` if the index is on the board and the cell is empty.
    ///
    /// Returns false and leaves the board untouched otherwise.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        let Some(cell) = self.cells.get_mut(index) else {
            debug!(index, "Index out of range");
            return false;
        };

        if !cell.is_empty() {
            debug!(index, "Cell already occupied");
            return false;
        }

        *cell = Cell::Occupied(mark);
        debug!(index, %mark, "Mark placed");
        true
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }
}

impl std::fmt::Display for Board {
    /// Empty cells show their index so a player can type it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{index}")?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
