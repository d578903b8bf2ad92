//! Ocean Tic-Tac-Toe - a single-screen tic-tac-toe game.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a fixed table of lines
//! - **Game**: move application as a value transition; invalid moves are no-ops
//! - **Session**: the current game plus a scoreboard that survives new games
//! - **TUI**: ratatui rendering and crossterm input on top of the session
//!
//! # Example
//!
//! ```
//! use ocean_tictactoe::{GameSession, Player};
//!
//! let mut session = GameSession::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.tap(index);
//! }
//! assert_eq!(session.result().winner(), Some(Player::X));
//! assert_eq!(session.scores().get(Player::X), 1);
//!
//! session.new_game();
//! assert_eq!(session.scores().get(Player::X), 1);
//! assert_eq!(session.current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings, ThemeSettings};

// Crate-level exports - Session
pub use session::GameSession;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameResult, LINES, MoveRejection, Player, Position, Scoreboard, Square,
    WinningLine, evaluate,
    rules::{is_full, winning_line},
};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, HitMap, Status, Theme, draw, key_action, move_cursor, run_tui};
