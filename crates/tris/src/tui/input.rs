//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tris_core::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps digit keys 1-9 to board indices 0-8.
pub fn digit_to_index(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Some(digit as usize - 1),
        _ => None,
    }
}
