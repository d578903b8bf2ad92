//! Runtime settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Input poll timeout in milliseconds; one tick per timeout.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// Ticks the status line stays emphasized after it changes.
    #[serde(default = "default_pulse_ticks")]
    pulse_ticks: u8,

    /// Colour palette.
    #[serde(default)]
    theme: ThemeSettings,
}

#[instrument]
fn default_tick_rate_ms() -> u64 {
    100
}

#[instrument]
fn default_pulse_ticks() -> u8 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            pulse_ticks: default_pulse_ticks(),
            theme: ThemeSettings::default(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(tick_rate_ms = settings.tick_rate_ms, "Config loaded successfully");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Theme colours as hex strings (`#RRGGBB`).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Accent for X, the primary button and the X score pill.
    primary: String,
    /// Accent for O, the secondary button and the O score pill.
    secondary: String,
    /// Screen background.
    background: String,
    /// Card background.
    surface: String,
    /// Body text.
    text: String,
    /// Labels, hints and the draw status.
    muted: String,
    /// Background of the winning cells.
    win_highlight: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary: "#2563EB".to_string(),
            secondary: "#F59E0B".to_string(),
            background: "#F9FAFB".to_string(),
            surface: "#FFFFFF".to_string(),
            text: "#111827".to_string(),
            muted: "#6B7280".to_string(),
            win_highlight: "#FEF3C7".to_string(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_theme_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r##"
            tick_rate_ms = 50

            [theme]
            primary = "#000080"
            "##,
        )
        .unwrap();
        assert_eq!(*settings.tick_rate_ms(), 50);
        assert_eq!(*settings.pulse_ticks(), 3);
        assert_eq!(settings.theme().primary(), "#000080");
        assert_eq!(settings.theme().secondary(), "#F59E0B");
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let err = Settings::from_toml("tick_rate_ms = \"fast\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
