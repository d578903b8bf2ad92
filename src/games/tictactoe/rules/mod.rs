//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; nothing here holds state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, winning_line};

use super::{Board, Player};
use serde::Serialize;
use tracing::instrument;

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameResult {
    /// No line completed and at least one empty square.
    InProgress,
    /// `player` holds all three squares of `line`.
    Win {
        /// The winner.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full with no completed line.
    Draw,
}

impl GameResult {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            GameResult::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates a board.
///
/// The first line in [`LINES`] order with three equal marks wins;
/// otherwise a full board is a draw and anything else is in progress.
#[instrument]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some((player, line)) = winning_line(board) {
        GameResult::Win { player, line }
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
