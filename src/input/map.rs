//! Pointer-position to grid-line hit-testing.
//!
//! A click selects the horizontal line (i, j) iff it lands on that line's
//! row (lines are one terminal cell thick, so the tolerance band is that
//! single row) with its column strictly between dots i and i + 1; the
//! vertical case is the transpose. Dots themselves and everything else map
//! to no line, and a no-line position is simply "no selection".

use crate::term::BoardLayout;
use crate::types::{Line, GRID_SIZE};

/// Map a terminal cell position to the line it selects, if any.
pub fn line_at(layout: &BoardLayout, column: u16, row: u16) -> Option<Line> {
    for j in 0..=GRID_SIZE {
        if row != layout.dot_y(j) {
            continue;
        }
        for i in 0..GRID_SIZE {
            if column > layout.dot_x(i) && column < layout.dot_x(i + 1) {
                return Some(Line::horizontal(i, j));
            }
        }
    }

    for i in 0..=GRID_SIZE {
        if column != layout.dot_x(i) {
            continue;
        }
        for j in 0..GRID_SIZE {
            if row > layout.dot_y(j) && row < layout.dot_y(j + 1) {
                return Some(Line::vertical(i, j));
            }
        }
    }

    None
}
