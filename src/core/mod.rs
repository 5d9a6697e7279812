//! Core module - pure game logic with no external dependencies
//!
//! Board state, box resolution, the opponent strategy, and the turn
//! controller. Zero dependencies on UI or I/O; everything here is
//! deterministic and unit-testable.

pub mod board;
pub mod game_state;
pub mod resolve;
pub mod strategy;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameState, Phase};
pub use resolve::{resolve_move, MoveReport};
pub use strategy::choose_move;
