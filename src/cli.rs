//! Command-line interface for ocean_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Ocean Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "ocean_tictactoe")]
#[command(about = "Single-screen tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file. Defaults apply when the default file is absent.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write logs (the screen itself is taken by the game)
    #[arg(long, default_value = "ocean_tictactoe.log")]
    pub log_file: PathBuf,
}

/// Settings file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "ocean_tictactoe.toml";
