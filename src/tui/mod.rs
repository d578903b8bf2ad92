//! Terminal front end: one screen, driven by key presses and mouse clicks.

mod app;
mod input;
mod status;
mod theme;
mod tick;
mod ui;

pub use app::App;
pub use input::{Action, HitMap, key_action, move_cursor};
pub use status::Status;
pub use theme::Theme;
pub use ui::draw;

use crate::config::Settings;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tick::Ticker;
use tracing::{error, info, instrument, warn};

/// Runs the game screen until the player quits.
///
/// The terminal is restored before returning, whether or not the loop
/// failed.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    let theme = Theme::from_settings(settings.theme())?;
    let tick_rate = Duration::from_millis(*settings.tick_rate_ms());

    info!("Starting Ocean Tic-Tac-Toe TUI");

    let mut terminal = setup_terminal()?;

    let app = App::new(theme, *settings.pulse_ticks());
    let res = run_app(&mut terminal, app, tick_rate);
    let restored = restore_terminal();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res.and(restored)
}

/// Switches the terminal into raw mode on the alternate screen with mouse
/// capture. If any step after raw mode fails, the terminal is restored
/// before the error is returned.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    restore_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal,
    )
}

/// Undoes everything [`setup_terminal`] does.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}

/// Runs `setup`; on failure runs `restore` and returns the setup error.
fn restore_on_error<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        if let Err(restore_err) = restore() {
            warn!(error = ?restore_err, "Terminal restore failed");
        }
    })
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut ticker = Ticker::new(tick_rate, Instant::now());
    loop {
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, &app))?;
        app.set_hit_map(hits);

        if event::poll(ticker.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_action(key.code) {
                        app.handle(action);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.click(mouse.column, mouse.row);
                }
                _ => {}
            }
        }
        if ticker.due(Instant::now()) {
            app.tick();
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
