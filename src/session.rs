//! Session state: the current game plus the running scoreboard.

use crate::games::tictactoe::{Game, GameResult, Player, Position, Scoreboard, WinningLine};
use tracing::{info, instrument};

/// Everything a screen needs to show and mutate.
///
/// The scoreboard outlives individual games; [`GameSession::new_game`]
/// replaces only the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    game: Game,
    scores: Scoreboard,
}

impl GameSession {
    /// Creates a session with a fresh game and zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The game in progress (or just finished).
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Wins per player.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Result of the current game.
    pub fn result(&self) -> GameResult {
        self.game.result()
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.game.to_move()
    }

    /// Line to highlight, present only while the current game is won.
    pub fn highlight(&self) -> Option<WinningLine> {
        self.game.result().line()
    }

    /// Whether `pos` is part of the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlight().is_some_and(|line| line.contains(pos))
    }

    /// Taps cell `index` for the current player.
    ///
    /// Invalid taps change nothing. A tap that wins the game credits the
    /// winner once; later taps are ignored until the next game, so the
    /// score cannot be counted twice.
    #[instrument(skip(self))]
    pub fn tap(&mut self, index: usize) {
        let was_in_progress = !self.game.result().is_terminal();
        let game = std::mem::take(&mut self.game);
        self.game = game.apply_move(index);

        if was_in_progress && let Some(winner) = self.game.result().winner() {
            self.scores.record_win(winner);
            info!(
                %winner,
                x = self.scores.get(Player::X),
                o = self.scores.get(Player::O),
                "Score updated"
            );
        }
    }

    /// Clears the board and hands the first move to X. Scores are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.game = Game::new();
    }

    /// Zeroes both scores and starts a new game.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("Resetting scores");
        self.scores.reset();
        self.new_game();
    }
}
