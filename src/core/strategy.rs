//! Opponent strategy - a tiered greedy scan over the unclaimed lines.
//!
//! The scan order is fixed (all horizontal lines row-major, then all
//! vertical lines row-major), so the choice is fully deterministic:
//!
//! 1. Take the first line that closes a box right now.
//! 2. Otherwise take the first line that does not hand a box to the other
//!    side, i.e. does not bring any adjacent box to three claimed edges.
//! 3. Otherwise every move opens a box; take the first unclaimed line and
//!    accept the sacrifice.
//!
//! This is a one-ply lookahead, not minimax. Completion and opening depend
//! only on edge counts, never on who owns the edges, so selection takes no
//! side; attribution happens when the move is claimed and resolved.

use crate::core::Board;
use crate::types::Line;

/// Pick the computer's next line.
///
/// Returns `None` only when the board has no unclaimed line left, which the
/// turn controller treats as game over.
pub fn choose_move(board: &Board) -> Option<Line> {
    // Tier 1: immediate completion.
    if let Some(line) = board
        .unclaimed_lines()
        .find(|&line| !board.boxes_completed_by(line).is_empty())
    {
        return Some(line);
    }

    // Tier 2: a safe line. No line completes anything at this point, so the
    // only concern is leaving a box at three edges.
    if let Some(line) = board
        .unclaimed_lines()
        .find(|&line| !opens_adjacent_box(board, line))
    {
        return Some(line);
    }

    // Tier 3: forced sacrifice.
    board.unclaimed_lines().next()
}

/// Would claiming `line` leave some adjacent box one edge from completion?
///
/// A box at exactly two claimed edges goes to three when `line` is drawn;
/// boundary lines check only their single adjacent box.
fn opens_adjacent_box(board: &Board, line: Line) -> bool {
    Board::adjacent_boxes(line)
        .iter()
        .any(|&(x, y)| board.box_owner(x, y).is_none() && board.claimed_edges(x, y) == 2)
}
