//! Line-oriented game loop over any reader and writer.

use crate::ConsoleConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Engine, Mark, MoveError, MoveOutcome, Phase, Position, Session};
use tracing::{debug, info, instrument, warn};

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at this cell index (0-8 or beyond, the engine decides).
    Cell(usize),
    /// Clear the board, keep the names.
    Reset,
    /// Forget the names and start over.
    NewGame,
    /// Leave the program.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses a line. Numbers are 1-based, as shown on the board.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Command::Quit,
            "r" | "reset" => return Command::Reset,
            "n" | "new" => return Command::NewGame,
            _ => {}
        }

        if let Ok(number) = line.parse::<usize>() {
            return match number.checked_sub(1) {
                Some(index) => Command::Cell(index),
                None => Command::Unknown(line.to_string()),
            };
        }

        match Position::from_label_or_number(line) {
            Some(pos) => Command::Cell(pos.to_index()),
            None => Command::Unknown(line.to_string()),
        }
    }
}

/// Drives an [`Engine`] from text input.
pub struct Console<R, W> {
    engine: Engine,
    config: ConsoleConfig,
    input: R,
    output: W,
    use_default_names: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console waiting for player names.
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Self {
        Self {
            engine: Engine::new(),
            config,
            input,
            output,
            use_default_names: true,
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Tic-Tac-Toe")?;
        loop {
            let keep_going = match self.engine.phase() {
                Phase::AwaitingNames => self.collect_names()?,
                Phase::InProgress => self.play_turn()?,
                Phase::Won(_) | Phase::Tied => self.after_game()?,
            };
            if !keep_going {
                info!("Leaving game loop");
                return Ok(());
            }
        }
    }

    /// Prompts for one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and parse as unknown input
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn collect_names(&mut self) -> Result<bool> {
        let defaults = if self.use_default_names {
            (self.config.player_x().clone(), self.config.player_o().clone())
        } else {
            (None, None)
        };
        // Defaults only pre-fill the first game
        self.use_default_names = false;

        let name_x = match defaults.0 {
            Some(name) => name,
            None => match self.prompt("Player 1 name (X): ")? {
                Some(name) => name,
                None => return Ok(false),
            },
        };
        let name_o = match defaults.1 {
            Some(name) => name,
            None => match self.prompt("Player 2 name (O): ")? {
                Some(name) => name,
                None => return Ok(false),
            },
        };

        match self.engine.initialize(&name_x, &name_o) {
            Ok(session) => {
                let banner = format!(
                    "{} (X) vs {} (O)",
                    session.player_name(Mark::X),
                    session.player_name(Mark::O)
                );
                writeln!(self.output, "{}", banner)?;
            }
            Err(e) => {
                warn!(error = %e, "Name entry rejected");
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(true)
    }

    fn play_turn(&mut self) -> Result<bool> {
        let Some(session) = self.engine.session() else {
            return Ok(true);
        };
        let board = render_board(session.board(), *self.config.show_positions());
        let turn = session.turn();
        let status = format!("Current player: {} ({})", session.player_name(turn), turn);
        writeln!(self.output, "\n{}\n{}", board, status)?;

        let Some(line) = self.prompt("Choose a cell (1-9), reset, new or quit: ")? else {
            return Ok(false);
        };

        let command = Command::parse(&line);
        debug!(?command, "Parsed input");
        match command {
            Command::Cell(index) => match self.engine.apply_move(index) {
                Ok(outcome) => self.report(outcome)?,
                Err(e) => writeln!(self.output, "Error: {}", move_error_message(&e))?,
            },
            Command::Reset => self.reset()?,
            Command::NewGame => self.engine.new_game(),
            Command::Quit => return Ok(false),
            Command::Unknown(text) => {
                writeln!(self.output, "Unrecognised input: {:?}", text)?;
            }
        }
        Ok(true)
    }

    fn after_game(&mut self) -> Result<bool> {
        let Some(line) = self.prompt("Type reset, new or quit: ")? else {
            return Ok(false);
        };
        match Command::parse(&line) {
            Command::Reset => self.reset()?,
            Command::NewGame => self.engine.new_game(),
            Command::Quit => return Ok(false),
            Command::Cell(index) => {
                // Let the engine explain why the board is closed
                if let Err(e) = self.engine.apply_move(index) {
                    writeln!(self.output, "Error: {}", move_error_message(&e))?;
                }
            }
            Command::Unknown(text) => {
                writeln!(self.output, "Unrecognised input: {:?}", text)?;
            }
        }
        Ok(true)
    }

    fn reset(&mut self) -> Result<()> {
        match self.engine.reset() {
            Ok(_) => writeln!(self.output, "Board cleared.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn report(&mut self, outcome: MoveOutcome) -> Result<()> {
        if !outcome.phase.is_terminal() {
            return Ok(());
        }
        let Some(session) = self.engine.session() else {
            return Ok(());
        };
        let text = format!(
            "{}\n{}",
            render_board(session.board(), false),
            result_message(session)
        );
        writeln!(self.output, "\n{}", text)?;
        Ok(())
    }
}

/// Board as text, with or without cell numbers in empty squares.
pub fn render_board(board: &Board, show_positions: bool) -> String {
    if show_positions {
        board.display()
    } else {
        board.to_string().trim_end_matches('\n').to_string()
    }
}

/// Engine error text, with cells counted 1-9 as the board shows them.
pub fn move_error_message(error: &MoveError) -> String {
    match error {
        MoveError::OutOfBounds(index) => format!(
            "Cell {} is out of bounds (choose 1-9)",
            index.saturating_add(1)
        ),
        other => other.to_string(),
    }
}

/// Win or tie message for a finished session; empty while in progress.
pub fn result_message(session: &Session) -> String {
    match session.phase() {
        Phase::Won(mark) => {
            let line = session
                .winning_line()
                .map(|l| format!(" ({})", l))
                .unwrap_or_default();
            format!("{} wins!{}", session.player_name(mark), line)
        }
        Phase::Tied => "It's a tie!".to_string(),
        Phase::AwaitingNames | Phase::InProgress => String::new(),
    }
}

/// Plays a fixed list of cell indices and prints the final position.
#[instrument(skip(config, output))]
pub fn play_script<W: Write>(
    config: &ConsoleConfig,
    moves: &[usize],
    output: &mut W,
) -> Result<Session> {
    let name_x = config.player_x().as_deref().unwrap_or("Player 1");
    let name_o = config.player_o().as_deref().unwrap_or("Player 2");

    let mut engine = Engine::new();
    engine.initialize(name_x, name_o).context("Invalid player names")?;

    for (n, &index) in moves.iter().enumerate() {
        engine
            .apply_move(index)
            .with_context(|| format!("Move {} (cell {}) rejected", n + 1, index))?;
    }

    let session = engine.session().cloned().context("Session disappeared")?;
    writeln!(output, "{}", render_board(session.board(), false))?;
    match session.phase() {
        Phase::InProgress => writeln!(
            output,
            "Game in progress, {} ({}) to move",
            session.player_name(session.turn()),
            session.turn()
        )?,
        _ => writeln!(output, "{}", result_message(&session))?,
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse(" Reset "), Command::Reset);
        assert_eq!(Command::parse("new"), Command::NewGame);
        assert_eq!(Command::parse("1"), Command::Cell(0));
        assert_eq!(Command::parse("9"), Command::Cell(8));
        assert_eq!(Command::parse("12"), Command::Cell(11));
        assert_eq!(Command::parse("center"), Command::Cell(4));
        assert_eq!(Command::parse("0"), Command::Unknown("0".to_string()));
        assert_eq!(Command::parse("banana"), Command::Unknown("banana".to_string()));
    }

    #[test]
    fn test_render_board_without_positions() {
        let board = Board::new();
        assert_eq!(
            render_board(&board, false),
            " | | \n-+-+-\n | | \n-+-+-\n | | "
        );
        assert!(render_board(&board, true).starts_with("1|2|3"));
    }

    #[test]
    fn test_out_of_bounds_uses_board_numbering() {
        assert_eq!(
            move_error_message(&MoveError::OutOfBounds(9)),
            "Cell 10 is out of bounds (choose 1-9)"
        );
        assert_eq!(
            move_error_message(&MoveError::OutOfBounds(usize::MAX)),
            format!("Cell {} is out of bounds (choose 1-9)", usize::MAX)
        );
        assert_eq!(
            move_error_message(&MoveError::GameOver),
            "Game is already over"
        );
    }
}
