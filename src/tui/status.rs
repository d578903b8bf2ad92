//! The one-line status shown under the scores.

use super::theme::Theme;
use crate::GameSession;
use crate::games::tictactoe::{GameResult, Player};
use ratatui::style::Color;

/// What the status line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Waiting for `Player` to move.
    #[display("Turn: Player {}", _0)]
    Turn(Player),
    /// `Player` completed a line.
    #[display("Player {} wins!", _0)]
    Won(Player),
    /// Board filled without a line.
    #[display("It's a draw!")]
    Draw,
}

impl Status {
    /// Status for the session's current game.
    pub fn of(session: &GameSession) -> Self {
        match session.result() {
            GameResult::InProgress => Status::Turn(session.current_player()),
            GameResult::Win { player, .. } => Status::Won(player),
            GameResult::Draw => Status::Draw,
        }
    }

    /// Colour of the status text.
    pub fn color(self, theme: &Theme) -> Color {
        match self {
            Status::Turn(_) => *theme.text(),
            Status::Won(player) => player_color(player, theme),
            Status::Draw => *theme.muted(),
        }
    }
}

/// Accent colour for a player's marks and score pill.
pub fn player_color(player: Player, theme: &Theme) -> Color {
    match player {
        Player::X => *theme.primary(),
        Player::O => *theme.secondary(),
    }
}
