//! Move application for a single game.
//!
//! [`Game`] is a value: moves consume it and hand back the next state,
//! so a caller never observes a half-applied move.

use super::position::Position;
use super::rules::{self, GameResult};
use super::types::{Board, Player, Square};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Why a move was not applied.
///
/// Rejected moves are no-ops; this type exists so callers and logs can
/// tell which precondition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    /// Index is not on the board.
    #[display("Index {} is outside the board (0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The game already has a result.
    #[display("Game is already over")]
    GameOver,
}

/// One game of tic-tac-toe: board, turn and result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    result: GameResult,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            result: GameResult::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's mark at `index`, or explains why not.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveRejection`] when the game is over, the index is
    /// off the board, or the square is taken. `self` is left untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn try_place(&self, index: usize) -> Result<Game, MoveRejection> {
        if self.result.is_terminal() {
            return Err(MoveRejection::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveRejection::OutOfRange(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveRejection::Occupied(pos));
        }

        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(self.to_move));
        next.history.push(pos);
        next.to_move = self.to_move.opponent();
        next.result = rules::evaluate(&next.board);

        match next.result {
            GameResult::Win { player, line } => {
                info!(%player, line = ?line.indices(), "Game won");
            }
            GameResult::Draw => info!("Game drawn"),
            GameResult::InProgress => debug!(position = %pos, "Move applied"),
        }

        Ok(next)
    }

    /// Applies a move at `index`, ignoring it if any precondition fails.
    ///
    /// ```
    /// use ocean_tictactoe::{Game, Player};
    ///
    /// let game = Game::new().apply_move(4);
    /// let same = game.clone().apply_move(4);
    /// assert_eq!(game, same);
    /// assert_eq!(game.to_move(), Player::O);
    /// ```
    #[instrument(skip(self))]
    pub fn apply_move(self, index: usize) -> Game {
        match self.try_place(index) {
            Ok(next) => next,
            Err(reason) => {
                debug!(%reason, "Move ignored");
                self
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_reasons() {
        let game = Game::new().apply_move(0);
        assert_eq!(game.try_place(9), Err(MoveRejection::OutOfRange(9)));
        assert_eq!(
            game.try_place(0),
            Err(MoveRejection::Occupied(Position::TopLeft))
        );

        let won = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(Game::new(), Game::apply_move);
        assert_eq!(won.try_place(8), Err(MoveRejection::GameOver));
    }

    #[test]
    fn test_turn_not_flipped_after_rejection() {
        let game = Game::new().apply_move(4).apply_move(4);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[Position::Center]);
    }

    #[test]
    fn test_rejection_is_a_std_error() {
        let game = Game::new().apply_move(0);
        let err: Box<dyn std::error::Error> = Box::new(game.try_place(0).unwrap_err());
        assert_eq!(err.to_string(), "Square Top-left is already occupied");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_game_over_check_precedes_range_check() {
        let won = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(Game::new(), Game::apply_move);
        assert_eq!(won.try_place(42), Err(MoveRejection::GameOver));
    }
}
