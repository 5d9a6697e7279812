//! Box resolution - turns a committed line claim into box ownership.
//!
//! This is the sole authority on whether a move earns another turn: a side
//! moves again exactly when its claim closed at least one box.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::{Line, Side};

/// The result of one committed move, consumed by the turn controller and
/// the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// The line that was claimed.
    pub line: Line,
    /// Who claimed it.
    pub side: Side,
    /// The boxes this claim closed (0, 1, or 2), in adjacency order.
    pub boxes: ArrayVec<(u8, u8), 2>,
}

impl MoveReport {
    /// True iff the mover keeps the turn.
    pub fn completed_box(&self) -> bool {
        !self.boxes.is_empty()
    }
}

/// Attribute every box closed by `line` to `side`.
///
/// `line` must already be claimed on the board; resolution never claims
/// lines itself.
pub fn resolve_move(board: &mut Board, line: Line, side: Side) -> MoveReport {
    let boxes = board.boxes_completed_by(line);
    board.apply_box_ownership(&boxes, side);
    MoveReport { line, side, boxes }
}
