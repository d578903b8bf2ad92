//! Ocean Tic-Tac-Toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, DEFAULT_CONFIG};
use ocean_tictactoe::{Settings, run_tui};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::from_file_or_default(DEFAULT_CONFIG)?,
    };
    info!(?settings, "Settings resolved");

    run_tui(&settings)
}

/// Sends logs to a file so they never draw over the game screen.
fn initialize_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
