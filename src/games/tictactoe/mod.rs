//! Tic-tac-toe rules, game state and scoring.

mod game;
mod position;
pub mod rules;
mod score;
mod types;

pub use game::{Game, MoveRejection};
pub use position::Position;
pub use rules::{GameResult, LINES, WinningLine, evaluate};
pub use score::Scoreboard;
pub use types::{Board, Player, Square};
