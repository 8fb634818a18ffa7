//! Stateless board rendering and intersection geometry.
//!
//! The renderer is a pure function of its inputs: it owns no state and
//! performs no rule evaluation. Coordinates map proportionally onto the
//! drawable area, `(x, y) -> (x/(N-1), y/(N-1))`, so the grid spans the
//! area edge to edge.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};

use crate::board::{Board, Coordinate, Stone, MAX_SIZE};

/// Inputs for one board rendering pass.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// Snapshot to draw.
    pub board: &'a Board,
    /// Whether empty intersections are click targets; also shows the cursor.
    pub interactive: bool,
    /// Cursor location, drawn only when interactive.
    pub cursor: Option<Coordinate>,
    /// Stone that additionally gets the inner-ring marker.
    pub last_move: Option<Coordinate>,
    /// Intersections drawn with the pulsing overlay, occupied or not.
    pub highlights: &'a [Coordinate],
}

impl<'a> BoardView<'a> {
    /// A non-interactive view with no markers, for the illustration boards.
    pub fn read_only(board: &'a Board) -> Self {
        Self {
            board,
            interactive: false,
            cursor: None,
            last_move: None,
            highlights: &[],
        }
    }
}

/// Screen cell of an intersection under the proportional mapping.
pub fn intersection_point(area: Rect, size: u8, coord: Coordinate) -> (u16, u16) {
    let span = size.saturating_sub(1).max(1) as u32;
    let w = area.width.saturating_sub(1) as u32;
    let h = area.height.saturating_sub(1) as u32;
    let x = area.x as u32 + (coord.x as u32 * w + span / 2) / span;
    let y = area.y as u32 + (coord.y as u32 * h + span / 2) / span;
    (x as u16, y as u16)
}

/// Maps a screen cell back to the nearest intersection.
///
/// Returns `None` for positions outside the board area. This is the
/// inverse of [`intersection_point`] and is how mouse clicks become
/// coordinates.
pub fn hit_test(area: Rect, size: u8, column: u16, row: u16) -> Option<Coordinate> {
    if size < 2 || area.width == 0 || area.height == 0 {
        return None;
    }
    if !area.contains(ratatui::layout::Position::new(column, row)) {
        return None;
    }
    let span = (size - 1) as u32;
    let w = area.width.saturating_sub(1).max(1) as u32;
    let h = area.height.saturating_sub(1).max(1) as u32;
    let gx = ((column - area.x) as u32 * span + w / 2) / w;
    let gy = ((row - area.y) as u32 * span + h / 2) / h;
    Some(Coordinate::new(gx as u8, gy as u8))
}

/// Centered board area with one row per grid line and one column gap,
/// shrunk to fit when the surrounding area is too small.
pub fn board_rect(area: Rect, size: u8) -> Rect {
    let width = (2 * size as u16).saturating_sub(1).min(area.width);
    let height = (size as u16).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Star points drawn on the standard grid.
const HOSHI: [u8; 3] = [3, 7, 11];

/// Renders a board snapshot into `area`.
pub fn render_board(frame: &mut Frame, area: Rect, view: &BoardView) {
    let size = view.board.size();
    if size < 2 || area.width < 2 || area.height < 2 {
        return;
    }

    let line_style = Style::default().fg(Color::DarkGray);
    let buf = frame.buffer_mut();

    let xs: Vec<u16> = (0..size)
        .map(|gx| intersection_point(area, size, Coordinate::new(gx, 0)).0)
        .collect();
    let ys: Vec<u16> = (0..size)
        .map(|gy| intersection_point(area, size, Coordinate::new(0, gy)).1)
        .collect();
    let (left, right) = (xs[0], xs[size as usize - 1]);
    let (top, bottom) = (ys[0], ys[size as usize - 1]);

    // Grid lines.
    for &sy in &ys {
        for sx in left..=right {
            buf.get_mut(sx, sy).set_char('─').set_style(line_style);
        }
    }
    for &sx in &xs {
        for sy in top..=bottom {
            let symbol = if ys.contains(&sy) {
                grid_char(sx == left, sx == right, sy == top, sy == bottom)
            } else {
                '│'
            };
            buf.get_mut(sx, sy).set_char(symbol).set_style(line_style);
        }
    }

    // Star points on the standard grid.
    if size == MAX_SIZE {
        for &hx in &HOSHI {
            for &hy in &HOSHI {
                let coord = Coordinate::new(hx, hy);
                if view.board.get(coord).is_none() {
                    let (sx, sy) = intersection_point(area, size, coord);
                    buf.get_mut(sx, sy).set_char('•').set_style(line_style);
                }
            }
        }
    }

    // Pulsing highlight overlay, independent of occupancy.
    for &coord in view.highlights {
        let (sx, sy) = intersection_point(area, size, coord);
        buf.get_mut(sx, sy)
            .set_style(Style::default().bg(Color::Red).add_modifier(Modifier::SLOW_BLINK));
    }

    // Stones; the last move carries the ring color.
    for (coord, stone) in view.board.stones() {
        let (sx, sy) = intersection_point(area, size, coord);
        let symbol = match stone {
            Stone::Black => '●',
            Stone::White => '○',
        };
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if view.last_move == Some(coord) {
            style = style.fg(Color::Yellow);
        }
        buf.get_mut(sx, sy).set_char(symbol).set_style(style);
    }

    // Cursor, only while the board accepts input.
    if view.interactive {
        if let Some(cursor) = view.cursor {
            let (sx, sy) = intersection_point(area, size, cursor);
            buf.get_mut(sx, sy)
                .set_style(Style::default().bg(Color::White).fg(Color::Black));
        }
    }
}

fn grid_char(left: bool, right: bool, top: bool, bottom: bool) -> char {
    match (left, right, top, bottom) {
        (true, _, true, _) => '┌',
        (_, true, true, _) => '┐',
        (true, _, _, true) => '└',
        (_, true, _, true) => '┘',
        (true, _, _, _) => '├',
        (_, true, _, _) => '┤',
        (_, _, true, _) => '┬',
        (_, _, _, true) => '┴',
        _ => '┼',
    }
}
