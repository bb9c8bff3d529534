//! Two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, Console, ConsoleConfig, play_script};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        ConsoleConfig::load_or_default(&cli.config)?.with_names(cli.player_x, cli.player_o);

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(config = %cli.config.display(), "Starting tic-tac-toe");

    let stdout = std::io::stdout();
    match cli.moves {
        Some(moves) => {
            let mut out = stdout.lock();
            play_script(&config, &moves, &mut out)?;
        }
        None => {
            let stdin = std::io::stdin();
            let mut console = Console::new(config, stdin.lock(), stdout.lock());
            console.run()?;
        }
    }

    Ok(())
}
