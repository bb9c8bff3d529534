//! Terminal front-end for the tic-tac-toe engine.
//!
//! Two players share one terminal. The [`Console`] reads commands from any
//! [`std::io::BufRead`] and writes the board to any [`std::io::Write`], so
//! the same loop runs against stdin/stdout or an in-memory buffer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;

pub use cli::Cli;
pub use config::{ConfigError, ConsoleConfig};
pub use console::{
    Command, Console, move_error_message, play_script, render_board, result_message,
};
