//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the view draws the full board
//! state into a styled framebuffer, and the renderer flushes it to a raw
//! terminal. The view is pure so it can be unit-tested; only the renderer
//! touches I/O. Redraws are whole-frame: the core emits its complete state
//! after every committed move and there is no partial-update protocol.

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use layout::{BoardLayout, Viewport};
pub use renderer::TerminalRenderer;
