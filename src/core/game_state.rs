//! Game state module - the turn controller.
//!
//! Owns the board and the phase machine. The human side moves through
//! [`GameState::select_line`], the computer through
//! [`GameState::opponent_step`]; both funnel every committed claim through
//! box resolution, which alone decides whether the turn repeats.

use std::cmp::Ordering;

use crate::core::{choose_move, resolve_move, Board, MoveReport};
use crate::types::{InvalidMove, Line, Outcome, Side};

/// Whose input the game is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayerInput,
    AwaitingOpponentMove,
    GameOver,
}

/// Complete game state: board, phase, nothing process-wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    phase: Phase,
}

impl GameState {
    /// Fresh board, human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingPlayerInput,
        }
    }

    /// Resume from a prepared position with the human to move.
    pub fn from_board(board: Board) -> Self {
        let phase = if board.is_game_over() {
            Phase::GameOver
        } else {
            Phase::AwaitingPlayerInput
        };
        Self { board, phase }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The side currently to move; `None` once the game is over.
    pub fn turn(&self) -> Option<Side> {
        match self.phase {
            Phase::AwaitingPlayerInput => Some(Side::Player),
            Phase::AwaitingOpponentMove => Some(Side::Opponent),
            Phase::GameOver => None,
        }
    }

    /// (player boxes, opponent boxes).
    pub fn scores(&self) -> (u8, u8) {
        (
            self.board.score(Side::Player),
            self.board.score(Side::Opponent),
        )
    }

    /// Final classification; `Some` only when the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.phase != Phase::GameOver {
            return None;
        }
        let (player, opponent) = self.scores();
        Some(match player.cmp(&opponent) {
            Ordering::Greater => Outcome::PlayerWin,
            Ordering::Less => Outcome::OpponentWin,
            Ordering::Equal => Outcome::Draw,
        })
    }

    /// Apply the human's line selection.
    ///
    /// Rejected selections (wrong phase, out of range, already claimed) are
    /// no-ops: nothing on the board changes and the turn does not pass.
    pub fn select_line(&mut self, line: Line) -> Result<MoveReport, InvalidMove> {
        if self.phase != Phase::AwaitingPlayerInput {
            return Err(InvalidMove::NotYourTurn);
        }
        self.board.claim_line(line, Side::Player)?;
        let report = resolve_move(&mut self.board, line, Side::Player);
        self.advance_after(&report);
        Ok(report)
    }

    /// Make one computer move.
    ///
    /// The phase stays `AwaitingOpponentMove` while the computer keeps
    /// closing boxes, so the runner calls this in a loop (with a visible
    /// pause) until the phase changes. Returns `None` outside that phase.
    pub fn opponent_step(&mut self) -> Option<MoveReport> {
        if self.phase != Phase::AwaitingOpponentMove {
            return None;
        }
        let Some(line) = choose_move(&self.board) else {
            // Unreachable while the phase machine upholds the not-full
            // precondition; degrade to game over rather than panic.
            self.phase = Phase::GameOver;
            return None;
        };
        // The line came out of the unclaimed-lines scan, so the claim holds.
        let _ = self.board.claim_line(line, Side::Opponent);
        let report = resolve_move(&mut self.board, line, Side::Opponent);
        self.advance_after(&report);
        Some(report)
    }

    fn advance_after(&mut self, report: &MoveReport) {
        if self.board.is_game_over() {
            self.phase = Phase::GameOver;
        } else if report.completed_box() {
            // Same side moves again; the phase already encodes that.
        } else {
            self.phase = match report.side {
                Side::Player => Phase::AwaitingOpponentMove,
                Side::Opponent => Phase::AwaitingPlayerInput,
            };
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
