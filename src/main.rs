//! Terminal Dots and Boxes runner (default binary).
//!
//! A blocking control loop: render the full board, then either wait for
//! the human's click or step the computer opponent. All game rules live in
//! `tui_dots::core`; this file only sequences I/O around them.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};

use tui_dots::core::{GameState, Phase};
use tui_dots::input::{map_event, InputEvent};
use tui_dots::term::{GameView, TerminalRenderer, Viewport};
use tui_dots::types::OPPONENT_MOVE_DELAY_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&game, viewport);
        term.draw(&fb)?;

        match game.phase() {
            Phase::AwaitingPlayerInput => {
                // Block until the human does something.
                match map_event(&event::read()?, &view.layout(viewport)) {
                    Some(InputEvent::Quit) => return Ok(()),
                    Some(InputEvent::SelectLine(line)) => {
                        // Taken lines and stray selections are no-ops.
                        let _ = game.select_line(line);
                    }
                    None => {}
                }
            }
            Phase::AwaitingOpponentMove => {
                // Pace the computer's chained moves while staying
                // responsive to quit.
                if event::poll(Duration::from_millis(OPPONENT_MOVE_DELAY_MS))? {
                    if map_event(&event::read()?, &view.layout(viewport))
                        == Some(InputEvent::Quit)
                    {
                        return Ok(());
                    }
                } else {
                    game.opponent_step();
                }
            }
            Phase::GameOver => {
                // Hold the final board and outcome banner until dismissed.
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
                    Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                        return Ok(())
                    }
                    _ => {}
                }
            }
        }
    }
}
