//! Cursor movement and the occupancy filter for click targets.

use crossterm::event::KeyCode;

use crate::board::{Board, Coordinate};

/// Moves the cursor one intersection, clamped to the grid.
pub fn move_cursor(cursor: Coordinate, key: KeyCode, size: u8) -> Coordinate {
    let max = size.saturating_sub(1);
    match key {
        KeyCode::Left => Coordinate::new(cursor.x.saturating_sub(1), cursor.y),
        KeyCode::Right => Coordinate::new((cursor.x + 1).min(max), cursor.y),
        KeyCode::Up => Coordinate::new(cursor.x, cursor.y.saturating_sub(1)),
        KeyCode::Down => Coordinate::new(cursor.x, (cursor.y + 1).min(max)),
        _ => cursor,
    }
}

/// The renderer's only legality check: a click event is emitted for a
/// coordinate exactly when its intersection is on the grid and empty.
/// Occupied intersections are a silent no-op.
pub fn click_target(board: &Board, coord: Coordinate) -> Option<Coordinate> {
    board.is_empty(coord).then_some(coord)
}
