//! Rendering and click handling against ratatui's test backend.

use ocean_tictactoe::{Action, App, HitMap, Player, Position, Theme, draw};
use ratatui::{Terminal, backend::TestBackend};

fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    let mut hits = HitMap::default();
    terminal.draw(|f| hits = draw(f, app)).unwrap();
    app.set_hit_map(hits);
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn center_of(rect: ratatui::layout::Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

#[test]
fn test_initial_screen() {
    let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
    let mut app = App::new(Theme::default(), 0);
    let screen = render(&mut terminal, &mut app);

    assert!(screen.contains("Player X"));
    assert!(screen.contains("Player O"));
    assert!(screen.contains("Turn: Player X"));
    assert!(screen.contains("New Game"));
    assert!(screen.contains("Reset Scores"));
    assert!(screen.contains("Ocean Professional"));
}

#[test]
fn test_click_cell_places_mark() {
    let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
    let mut app = App::new(Theme::default(), 0);
    render(&mut terminal, &mut app);

    let hits = {
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = draw(f, &app)).unwrap();
        hits
    };
    let (x, y) = center_of(hits.cells[Position::BottomLeft.to_index()]);
    app.click(x, y);

    assert_eq!(
        app.session().game().board().get(Position::BottomLeft).player(),
        Some(Player::X)
    );
    assert_eq!(*app.cursor(), Position::BottomLeft);

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Turn: Player O"));
}

#[test]
fn test_win_then_buttons() {
    let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
    let mut app = App::new(Theme::default(), 0);
    for index in [0, 3, 1, 4, 2] {
        app.handle(Action::Tap(index));
    }
    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Player X wins!"));

    let hits = {
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = draw(f, &app)).unwrap();
        hits
    };

    let (x, y) = center_of(hits.new_game);
    app.click(x, y);
    assert_eq!(app.session().scores().get(Player::X), 1);
    assert!(app.session().game().history().is_empty());

    let (x, y) = center_of(hits.reset_scores);
    app.click(x, y);
    assert_eq!(app.session().scores().get(Player::X), 0);

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Turn: Player X"));
}
