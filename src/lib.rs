//! Dots and Boxes for the terminal.
//!
//! `core` holds the rules and the computer opponent, `input` maps terminal
//! events to line selections, `term` renders the board. The core is pure:
//! the other modules consume it through its public API and never mutate
//! game state on their own.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
