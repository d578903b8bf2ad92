//! Tests for score keeping across games.

use ocean_tictactoe::{GameResult, GameSession, Player, Position, Square};

fn tap_all(session: &mut GameSession, moves: &[usize]) {
    for &index in moves {
        session.tap(index);
    }
}

#[test]
fn test_win_increments_score_once() {
    let mut session = GameSession::new();
    tap_all(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(session.scores().get(Player::X), 1);
    assert_eq!(session.scores().get(Player::O), 0);

    // Further taps after the win are ignored and must not score again.
    tap_all(&mut session, &[5, 6, 7, 8, 2]);
    assert_eq!(session.scores().get(Player::X), 1);
    assert_eq!(session.game().history().len(), 5);
}

#[test]
fn test_highlight_follows_win() {
    let mut session = GameSession::new();
    assert_eq!(session.highlight(), None);
    tap_all(&mut session, &[0, 3, 1, 4, 2]);
    let line = session.highlight().expect("winning line");
    assert_eq!(line.indices(), [0, 1, 2]);
    assert!(session.is_highlighted(Position::TopCenter));
    assert!(!session.is_highlighted(Position::Center));
}

#[test]
fn test_draw_scores_nobody() {
    let mut session = GameSession::new();
    tap_all(&mut session, &[4, 0, 8, 2, 1, 7, 6, 3, 5]);
    assert_eq!(session.result(), GameResult::Draw);
    assert_eq!(session.scores().get(Player::X), 0);
    assert_eq!(session.scores().get(Player::O), 0);
}

#[test]
fn test_new_game_keeps_scores() {
    let mut session = GameSession::new();
    tap_all(&mut session, &[3, 0, 4, 1, 8, 2]);
    assert_eq!(session.result().winner(), Some(Player::O));

    session.new_game();
    assert_eq!(session.scores().get(Player::O), 1);
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.result(), GameResult::InProgress);
    assert_eq!(session.highlight(), None);
    assert!(session.game().board().squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_new_game_mid_game_resets_turn() {
    let mut session = GameSession::new();
    session.tap(4);
    assert_eq!(session.current_player(), Player::O);
    session.new_game();
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_reset_scores_zeroes_and_clears_board() {
    let mut session = GameSession::new();
    tap_all(&mut session, &[0, 3, 1, 4, 2]);
    session.new_game();
    tap_all(&mut session, &[3, 0, 4, 1, 8, 2]);
    assert_eq!(session.scores().get(Player::X), 1);
    assert_eq!(session.scores().get(Player::O), 1);

    session.tap(4);
    session.reset_scores();
    assert_eq!(session.scores().get(Player::X), 0);
    assert_eq!(session.scores().get(Player::O), 0);
    assert_eq!(session.current_player(), Player::X);
    assert!(session.game().history().is_empty());
}

#[test]
fn test_scores_accumulate_over_games() {
    let mut session = GameSession::new();
    for _ in 0..3 {
        tap_all(&mut session, &[0, 3, 1, 4, 2]);
        session.new_game();
    }
    assert_eq!(session.scores().get(Player::X), 3);
}
