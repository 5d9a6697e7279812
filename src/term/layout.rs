//! Board geometry shared by the view and input hit-testing.
//!
//! Dots sit on a regular lattice: dot (i, j) at terminal cell
//! (origin_x + i * cell_w, origin_y + j * cell_h). Lines occupy the cells
//! strictly between two dots, one cell thick, which is also exactly the
//! band a mouse click must land in to select them.

use crate::types::GRID_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Placement of the dot grid inside the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    /// Columns between two horizontally adjacent dots.
    pub cell_w: u16,
    /// Rows between two vertically adjacent dots.
    pub cell_h: u16,
}

impl BoardLayout {
    pub fn new(origin_x: u16, origin_y: u16, cell_w: u16, cell_h: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_w,
            cell_h,
        }
    }

    /// Total grid width in columns, dots included.
    pub fn grid_w(&self) -> u16 {
        GRID_SIZE as u16 * self.cell_w + 1
    }

    /// Total grid height in rows, dots included.
    pub fn grid_h(&self) -> u16 {
        GRID_SIZE as u16 * self.cell_h + 1
    }

    /// Column of dot column `i`.
    pub fn dot_x(&self, i: u8) -> u16 {
        self.origin_x + i as u16 * self.cell_w
    }

    /// Row of dot row `j`.
    pub fn dot_y(&self, j: u8) -> u16 {
        self.origin_y + j as u16 * self.cell_h
    }
}
