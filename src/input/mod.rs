//! Input module - terminal events to discrete game input.
//!
//! Raw crossterm events become either a line selection (left click inside
//! a line's band, see [`map::line_at`]) or a quit request. Everything else
//! is ignored; the core never sees raw coordinates.

pub mod map;

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::term::BoardLayout;
use crate::types::Line;

/// A discrete input the control loop acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    SelectLine(Line),
    Quit,
}

/// Translate one terminal event, given where the board currently sits.
pub fn map_event(event: &Event, layout: &BoardLayout) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            map::line_at(layout, mouse.column, mouse.row).map(InputEvent::SelectLine)
        }
        _ => None,
    }
}
