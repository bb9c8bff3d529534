//! Command-line interface for the tic-tac-toe console.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name of the player using X (skips the prompt)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name of the player using O (skips the prompt)
    #[arg(long)]
    pub player_o: Option<String>,

    /// Play these cell indices (0-8, comma separated), print the result and exit
    #[arg(long, value_delimiter = ',')]
    pub moves: Option<Vec<usize>>,
}
