//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, Phase};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::layout::{BoardLayout, Viewport};
use crate::types::{Line, Outcome, Side, GRID_SIZE};

/// Width of the score panel to the right of the grid.
const PANEL_W: u16 = 24;
/// Gap between grid and panel.
const PANEL_GAP: u16 = 3;

const PLAYER_COLOR: Rgb = Rgb::new(60, 220, 60);
const OPPONENT_COLOR: Rgb = Rgb::new(230, 70, 70);
const DOT_COLOR: Rgb = Rgb::new(235, 235, 235);
const HINT_COLOR: Rgb = Rgb::new(140, 140, 150);

/// Renders the full board state each frame; no partial updates.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide cells compensate for the terminal glyph aspect ratio.
        Self {
            cell_w: 8,
            cell_h: 4,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Where the grid lands for a given viewport. Input hit-testing uses
    /// the same layout, so clicks and drawing can never disagree.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let grid_w = GRID_SIZE as u16 * self.cell_w + 1;
        let grid_h = GRID_SIZE as u16 * self.cell_h + 1;
        let total_w = grid_w + PANEL_GAP + PANEL_W;

        let origin_x = viewport.width.saturating_sub(total_w) / 2;
        let origin_y = viewport.height.saturating_sub(grid_h) / 2;
        BoardLayout::new(origin_x, origin_y, self.cell_w, self.cell_h)
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = self.layout(viewport);

        self.draw_boxes(&mut fb, game, &layout);
        self.draw_lines(&mut fb, game, &layout);
        self.draw_dots(&mut fb, &layout);
        self.draw_panel(&mut fb, game, &layout);

        if game.phase() == Phase::GameOver {
            self.draw_outcome_banner(&mut fb, game, &layout);
        }

        fb
    }

    fn draw_boxes(&self, fb: &mut FrameBuffer, game: &GameState, layout: &BoardLayout) {
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                let Some(owner) = game.board().box_owner(x, y) else {
                    continue;
                };
                let style = CellStyle::new(Rgb::new(0, 0, 0), side_color(owner));
                fb.fill_rect(
                    layout.dot_x(x) + 1,
                    layout.dot_y(y) + 1,
                    self.cell_w - 1,
                    self.cell_h - 1,
                    ' ',
                    style,
                );
            }
        }
    }

    fn draw_lines(&self, fb: &mut FrameBuffer, game: &GameState, layout: &BoardLayout) {
        for i in 0..GRID_SIZE {
            for j in 0..=GRID_SIZE {
                let line = Line::horizontal(i, j);
                if let Some(Some(side)) = game.board().get(line) {
                    let style = CellStyle::new(side_color(side), Rgb::new(0, 0, 0)).bold();
                    let y = layout.dot_y(j);
                    for x in layout.dot_x(i) + 1..layout.dot_x(i + 1) {
                        fb.put_char(x, y, '─', style);
                    }
                }
            }
        }
        for i in 0..=GRID_SIZE {
            for j in 0..GRID_SIZE {
                let line = Line::vertical(i, j);
                if let Some(Some(side)) = game.board().get(line) {
                    let style = CellStyle::new(side_color(side), Rgb::new(0, 0, 0)).bold();
                    let x = layout.dot_x(i);
                    for y in layout.dot_y(j) + 1..layout.dot_y(j + 1) {
                        fb.put_char(x, y, '│', style);
                    }
                }
            }
        }
    }

    fn draw_dots(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let style = CellStyle::new(DOT_COLOR, Rgb::new(0, 0, 0)).bold();
        for i in 0..=GRID_SIZE {
            for j in 0..=GRID_SIZE {
                fb.put_char(layout.dot_x(i), layout.dot_y(j), '•', style);
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, game: &GameState, layout: &BoardLayout) {
        let x = layout.dot_x(GRID_SIZE) + 1 + PANEL_GAP;
        let y = layout.origin_y;
        let (player, opponent) = game.scores();

        fb.put_str(x, y, "DOTS AND BOXES", CellStyle::default().bold());

        let player_style = CellStyle::new(PLAYER_COLOR, Rgb::new(0, 0, 0));
        let opponent_style = CellStyle::new(OPPONENT_COLOR, Rgb::new(0, 0, 0));
        fb.put_str(x, y + 2, &format!("You  {player}"), player_style);
        fb.put_str(x, y + 3, &format!("CPU  {opponent}"), opponent_style);

        let status = match game.phase() {
            Phase::AwaitingPlayerInput => "your move",
            Phase::AwaitingOpponentMove => "thinking...",
            Phase::GameOver => match game.outcome() {
                Some(Outcome::PlayerWin) => "you win!",
                Some(Outcome::OpponentWin) => "you lose!",
                _ => "draw!",
            },
        };
        fb.put_str(x, y + 5, status, CellStyle::default());

        let hint_style = CellStyle::new(HINT_COLOR, Rgb::new(0, 0, 0));
        fb.put_str(x, y + 7, "click a line to", hint_style);
        fb.put_str(x, y + 8, "claim it / q quits", hint_style);
    }

    fn draw_outcome_banner(&self, fb: &mut FrameBuffer, game: &GameState, layout: &BoardLayout) {
        let (player, opponent) = game.scores();
        let (text, color) = match game.outcome() {
            Some(Outcome::PlayerWin) => (format!(" You win! {player} : {opponent} "), PLAYER_COLOR),
            Some(Outcome::OpponentWin) => {
                (format!(" You lose! {player} : {opponent} "), OPPONENT_COLOR)
            }
            _ => (format!(" Draw! {player} : {opponent} "), DOT_COLOR),
        };

        let len = text.chars().count() as u16;
        let grid_w = layout.grid_w();
        let x = layout.origin_x + grid_w.saturating_sub(len) / 2;
        let y = layout.origin_y + layout.grid_h() / 2;
        let style = CellStyle::new(Rgb::new(0, 0, 0), color).bold();
        fb.put_str(x, y, &text, style);
    }
}

fn side_color(side: Side) -> Rgb {
    match side {
        Side::Player => PLAYER_COLOR,
        Side::Opponent => OPPONENT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn viewport() -> Viewport {
        Viewport::new(80, 24)
    }

    #[test]
    fn test_render_draws_all_dots() {
        let view = GameView::default();
        let game = GameState::new();
        let fb = view.render(&game, viewport());
        let layout = view.layout(viewport());

        for i in 0..=GRID_SIZE {
            for j in 0..=GRID_SIZE {
                let cell = fb.get(layout.dot_x(i), layout.dot_y(j)).unwrap();
                assert_eq!(cell.ch, '•');
            }
        }
    }

    #[test]
    fn test_claimed_line_appears_in_side_color() {
        let mut board = Board::new();
        board.claim_line(Line::horizontal(0, 0), Side::Player).unwrap();
        let game = GameState::from_board(board);

        let view = GameView::default();
        let fb = view.render(&game, viewport());
        let layout = view.layout(viewport());

        let cell = fb.get(layout.dot_x(0) + 1, layout.dot_y(0)).unwrap();
        assert_eq!(cell.ch, '─');
        assert_eq!(cell.style.fg, PLAYER_COLOR);
    }

    #[test]
    fn test_owned_box_is_filled() {
        let mut board = Board::new();
        for line in Board::box_edges(0, 0) {
            board.claim_line(line, Side::Opponent).unwrap();
        }
        board.apply_box_ownership(&[(0, 0)], Side::Opponent);
        let game = GameState::from_board(board);

        let view = GameView::default();
        let fb = view.render(&game, viewport());
        let layout = view.layout(viewport());

        let cell = fb.get(layout.dot_x(0) + 1, layout.dot_y(0) + 1).unwrap();
        assert_eq!(cell.style.bg, OPPONENT_COLOR);
    }

    #[test]
    fn test_layout_matches_between_frames() {
        // Hit-testing relies on the layout being a pure function of the
        // viewport, not of game state.
        let view = GameView::default();
        assert_eq!(view.layout(viewport()), view.layout(viewport()));
    }
}
