//! Keyboard and mouse mapping onto game actions.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Tap the cell at this index.
    Tap(usize),
    /// Tap the cell under the keyboard cursor.
    TapCursor,
    /// Move the keyboard cursor.
    Cursor(KeyCode),
    /// Clear the board, keep the scores.
    NewGame,
    /// Zero the scores and clear the board.
    ResetScores,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action.
pub fn key_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('r') => Some(Action::ResetScores),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Tap(d as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::TapCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(code)),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. Stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Screen rectangles of everything clickable, recorded at draw time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Cell rectangles in board-index order.
    pub cells: [Rect; 9],
    /// The New Game button.
    pub new_game: Rect,
    /// The Reset Scores button.
    pub reset_scores: Rect,
}

impl HitMap {
    /// Action for a click at terminal column `x`, row `y`.
    pub fn target(&self, x: u16, y: u16) -> Option<Action> {
        if let Some(index) = self.cells.iter().position(|r| contains(*r, x, y)) {
            Some(Action::Tap(index))
        } else if contains(self.new_game, x, y) {
            Some(Action::NewGame)
        } else if contains(self.reset_scores, x, y) {
            Some(Action::ResetScores)
        } else {
            None
        }
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digit_keys_map_to_indices() {
        assert_eq!(key_action(KeyCode::Char('1')), Some(Action::Tap(0)));
        assert_eq!(key_action(KeyCode::Char('9')), Some(Action::Tap(8)));
        assert_eq!(key_action(KeyCode::Char('0')), None);
        assert_eq!(key_action(KeyCode::Char('n')), Some(Action::NewGame));
        assert_eq!(key_action(KeyCode::Char('r')), Some(Action::ResetScores));
    }

    #[test]
    fn test_hit_map_target() {
        let mut hits = HitMap::default();
        hits.cells[4] = Rect::new(10, 10, 5, 3);
        hits.new_game = Rect::new(0, 20, 10, 3);
        assert_eq!(hits.target(10, 10), Some(Action::Tap(4)));
        assert_eq!(hits.target(14, 12), Some(Action::Tap(4)));
        assert_eq!(hits.target(15, 12), None);
        assert_eq!(hits.target(3, 21), Some(Action::NewGame));
    }
}
