//! Application state and logic.

use super::input::{self, Action, HitMap};
use super::status::Status;
use super::theme::Theme;
use crate::GameSession;
use crate::games::tictactoe::Position;
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    session: GameSession,
    cursor: Position,
    theme: Theme,
    /// Remaining ticks of status emphasis.
    pulse: u8,
    #[getter(skip)]
    pulse_ticks: u8,
    #[getter(skip)]
    last_status: Status,
    #[getter(skip)]
    hit_map: HitMap,
    #[getter(skip)]
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(theme: Theme, pulse_ticks: u8) -> Self {
        let session = GameSession::new();
        let last_status = Status::of(&session);
        Self {
            session,
            cursor: Position::Center,
            theme,
            pulse: pulse_ticks,
            pulse_ticks,
            last_status,
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// Status for the current game.
    pub fn status(&self) -> Status {
        self.last_status
    }

    /// Whether the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Replaces the clickable regions with those of the latest frame.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Applies one action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Tap(index) => self.session.tap(index),
            Action::TapCursor => self.session.tap(self.cursor.to_index()),
            Action::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::NewGame => self.session.new_game(),
            Action::ResetScores => self.session.reset_scores(),
            Action::Quit => self.should_quit = true,
        }
        self.refresh_status();
    }

    /// Handles a left click at a terminal cell.
    #[instrument(skip(self))]
    pub fn click(&mut self, column: u16, row: u16) {
        match self.hit_map.target(column, row) {
            Some(action) => {
                if let Action::Tap(index) = action
                    && let Some(pos) = Position::from_index(index)
                {
                    self.cursor = pos;
                }
                self.handle(action);
            }
            None => debug!("Click outside any control"),
        }
    }

    /// Advances the status pulse by one tick.
    pub fn tick(&mut self) {
        self.pulse = self.pulse.saturating_sub(1);
    }

    fn refresh_status(&mut self) {
        let status = Status::of(&self.session);
        if status != self.last_status {
            debug!(%status, "Status changed");
            self.last_status = status;
            self.pulse = self.pulse_ticks;
        }
    }
}
