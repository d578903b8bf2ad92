//! Cumulative win counts across games.

use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins per player since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Both scores at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Adds one win for `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
    }

    /// Zeroes both scores.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
