//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app::App;
use super::input::HitMap;
use super::status::player_color;
use super::theme::Theme;
use crate::games::tictactoe::{Player, Position, Square};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const GRID_COLOR: Color = Color::Rgb(0xDB, 0xEA, 0xFE);

/// Draws the whole screen and returns where the clickable parts landed.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let theme = app.theme();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(*theme.background())),
        area,
    );

    let [header, board, controls, footer] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Min(GRID_HEIGHT + 2),
        Constraint::Length(5),
        Constraint::Length(2),
    ])
    .areas(area);

    draw_header(frame, header, app);
    let cells = draw_board(frame, board, app);
    let (new_game, reset_scores) = draw_controls(frame, controls, theme);
    draw_footer(frame, footer, theme);

    HitMap {
        cells,
        new_game,
        reset_scores,
    }
}

fn card(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(*theme.muted()))
        .style(Style::default().bg(*theme.surface()))
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let block = card(theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [pills, status] = Layout::vertical([Constraint::Length(3), Constraint::Length(2)]).areas(inner);
    let [x_pill, o_pill] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(1)
        .areas(pills);

    for (player, pill) in [(Player::X, x_pill), (Player::O, o_pill)] {
        let accent = player_color(player, theme);
        let score = app.session().scores().get(player);
        let widget = Paragraph::new(Line::from(vec![
            Span::styled(format!("Player {}  ", player), Style::default().fg(*theme.muted())),
            Span::styled(
                score.to_string(),
                Style::default().fg(*theme.text()).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        );
        frame.render_widget(widget, pill);
    }

    let current = app.status();
    let mut style = Style::default()
        .fg(current.color(theme))
        .add_modifier(Modifier::BOLD);
    if *app.pulse() > 0 {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    let status_line = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(current.to_string(), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(status_line, status);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let theme = app.theme();
    let block = card(theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = center_rect(inner, GRID_WIDTH, GRID_HEIGHT);
    frame.render_widget(
        Paragraph::new(grid_lines()).style(Style::default().fg(GRID_COLOR)),
        grid,
    );

    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        let col = pos.col() as u16;
        let row = pos.row() as u16;
        let rect = Rect::new(
            grid.x + col * (CELL_WIDTH + 1),
            grid.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid);
        draw_cell(frame, rect, app, pos);
        cells[pos.to_index()] = rect;
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let theme = app.theme();
    let session = app.session();

    let (symbol, fg) = match session.game().board().get(pos) {
        Square::Empty => ((pos.to_index() + 1).to_string(), *theme.muted()),
        Square::Occupied(player) => (player.to_string(), player_color(player, theme)),
    };

    let bg = if session.is_highlighted(pos) {
        *theme.win_highlight()
    } else {
        *theme.surface()
    };

    let mut style = Style::default().fg(fg).bg(bg);
    if session.game().board().get(pos) == Square::Empty {
        style = style.add_modifier(Modifier::DIM);
    } else {
        style = style.add_modifier(Modifier::BOLD);
    }
    if pos == *app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let text = Text::from(vec![Line::default(), Line::from(symbol), Line::default()]);
    frame.render_widget(
        Paragraph::new(text).style(style).alignment(Alignment::Center),
        area,
    );
}

fn grid_lines() -> Text<'static> {
    let cell_row = format!(
        "{}│{}│{}",
        " ".repeat(CELL_WIDTH as usize),
        " ".repeat(CELL_WIDTH as usize),
        " ".repeat(CELL_WIDTH as usize)
    );
    let rule = format!(
        "{}┼{}┼{}",
        "─".repeat(CELL_WIDTH as usize),
        "─".repeat(CELL_WIDTH as usize),
        "─".repeat(CELL_WIDTH as usize)
    );

    let mut lines = Vec::with_capacity(GRID_HEIGHT as usize);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::from(rule.clone()));
        }
        for _ in 0..CELL_HEIGHT {
            lines.push(Line::from(cell_row.clone()));
        }
    }
    Text::from(lines)
}

fn draw_controls(frame: &mut Frame, area: Rect, theme: &Theme) -> (Rect, Rect) {
    let block = card(theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [new_game, reset_scores] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(2)
        .areas(inner);

    let primary = Paragraph::new("New Game (n)")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(*theme.primary())
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    frame.render_widget(primary, new_game);

    let secondary = Paragraph::new("Reset Scores (r)")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(*theme.secondary())
                .bg(*theme.win_highlight())
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(*theme.secondary())),
        );
    frame.render_widget(secondary, reset_scores);

    (new_game, reset_scores)
}

fn draw_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(vec![
        Line::from("Tic Tac Toe · Ocean Professional"),
        Line::from("1-9 or arrows + Enter: move · click: tap · q: quit"),
    ])
    .style(Style::default().fg(*theme.muted()))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
    .intersection(area)
}
