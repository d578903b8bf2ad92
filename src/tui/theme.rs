//! The "Ocean Professional" palette as terminal colours.

use crate::config::{ConfigError, ThemeSettings};
use derive_getters::Getters;
use ratatui::style::Color;
use std::str::FromStr;
use tracing::instrument;

/// Resolved colours used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Theme {
    primary: Color,
    secondary: Color,
    background: Color,
    surface: Color,
    text: Color,
    muted: Color,
    win_highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x25, 0x63, 0xEB),
            secondary: Color::Rgb(0xF5, 0x9E, 0x0B),
            background: Color::Rgb(0xF9, 0xFA, 0xFB),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x11, 0x18, 0x27),
            muted: Color::Rgb(0x6B, 0x72, 0x80),
            win_highlight: Color::Rgb(0xFE, 0xF3, 0xC7),
        }
    }
}

impl Theme {
    /// Parses every colour in `settings`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first colour that does not parse.
    #[instrument(skip(settings))]
    pub fn from_settings(settings: &ThemeSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            primary: parse_color("primary", settings.primary())?,
            secondary: parse_color("secondary", settings.secondary())?,
            background: parse_color("background", settings.background())?,
            surface: parse_color("surface", settings.surface())?,
            text: parse_color("text", settings.text())?,
            muted: parse_color("muted", settings.muted())?,
            win_highlight: parse_color("win_highlight", settings.win_highlight())?,
        })
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|e| ConfigError::new(format!("Invalid colour for theme.{}: {:?} ({})", name, value, e)))
}
