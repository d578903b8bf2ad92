//! Named board positions.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Displays as a human label ("Top-left", "Center", ...), which is what
/// move logs and rejection messages show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Position {
    /// Top-left (position 0)
    #[strum(to_string = "Top-left")]
    TopLeft,
    /// Top-center (position 1)
    #[strum(to_string = "Top-center")]
    TopCenter,
    /// Top-right (position 2)
    #[strum(to_string = "Top-right")]
    TopRight,
    /// Middle-left (position 3)
    #[strum(to_string = "Middle-left")]
    MiddleLeft,
    /// Center (position 4)
    #[strum(to_string = "Center")]
    Center,
    /// Middle-right (position 5)
    #[strum(to_string = "Middle-right")]
    MiddleRight,
    /// Bottom-left (position 6)
    #[strum(to_string = "Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 7)
    #[strum(to_string = "Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 8)
    #[strum(to_string = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2, left to right).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from a row and column, `None` outside the grid.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}
