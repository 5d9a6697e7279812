//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Number of boxes per side of the grid.
///
/// A grid of N×N boxes has N*(N+1) horizontal lines and (N+1)*N vertical
/// lines. The value is a compile-time constant; there is no runtime sizing.
pub const GRID_SIZE: u8 = 3;

/// Pacing between chained computer moves (milliseconds), so the opponent's
/// play is watchable instead of instantaneous.
pub const OPPONENT_MOVE_DELAY_MS: u64 = 300;

/// A side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human.
    Player,
    /// The computer.
    Opponent,
}

impl Side {
    /// The side that moves when this one passes the turn.
    pub fn other(&self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// Orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// A grid line address.
///
/// Horizontal lines: `i` in `0..GRID_SIZE`, `j` in `0..=GRID_SIZE`.
/// Vertical lines: `i` in `0..=GRID_SIZE`, `j` in `0..GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub orientation: Orientation,
    pub i: u8,
    pub j: u8,
}

impl Line {
    /// The horizontal line from dot (i, j) to dot (i + 1, j).
    pub fn horizontal(i: u8, j: u8) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            i,
            j,
        }
    }

    /// The vertical line from dot (i, j) to dot (i, j + 1).
    pub fn vertical(i: u8, j: u8) -> Self {
        Self {
            orientation: Orientation::Vertical,
            i,
            j,
        }
    }
}

/// Why a claim was rejected. All variants recover locally: the input is
/// ignored and no state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    /// Line coordinates outside the grid for that orientation.
    OutOfRange,
    /// The line already belongs to a side.
    AlreadyClaimed,
    /// A selection arrived while it was not the player's turn.
    NotYourTurn,
}

/// Final classification of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    OpponentWin,
    Draw,
}
