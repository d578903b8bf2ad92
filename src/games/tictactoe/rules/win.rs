//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// The eight winning lines, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three positions forming one of the [`LINES`].
///
/// Only [`winning_line`] constructs these, so a value is always a
/// predefined triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices of the line, ascending.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Finds the first completed line in [`LINES`] order.
///
/// Returns the owning player and the line, or `None` if no
/// line holds three equal marks.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, WinningLine([a, b, c])))
            }
            _ => None,
        }
    })
}
