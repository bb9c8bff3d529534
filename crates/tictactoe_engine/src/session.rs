//! A single game between two named players.

use crate::contracts::LegalMove;
use crate::rules::{Line, is_full, winning_line};
use crate::{Board, Mark, Move, MoveError, Phase, Players, Position, Square, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Board, turn, phase, move history and player names for one game.
///
/// A session is always past name entry, so its phase is one of
/// `InProgress`, `Won` or `Tied`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) players: Players,
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
    pub(crate) winning_line: Option<Line>,
}

/// What happened as a result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub applied: Move,
    /// Phase after the move.
    pub phase: Phase,
    /// Completed line when the move won the game, for highlighting.
    pub winning_line: Option<Line>,
    /// Moves made so far, including this one.
    pub move_count: usize,
}

impl MoveOutcome {
    /// Mark to move next, if the game goes on.
    pub fn next_turn(&self) -> Option<Mark> {
        match self.phase {
            Phase::InProgress => Some(self.applied.mark.opponent()),
            _ => None,
        }
    }
}

impl Session {
    /// Starts a session from two raw names. The first name plays X.
    ///
    /// Fails with [`ValidationError::EmptyName`] if either name is blank
    /// after trimming.
    #[instrument(skip(name_x, name_o))]
    pub fn initialize(name_x: &str, name_o: &str) -> Result<Self, ValidationError> {
        let players = Players::new(name_x, name_o)?;
        Ok(Self::with_players(players))
    }

    /// Starts a fresh session for already validated players.
    #[instrument(skip(players))]
    pub fn with_players(players: Players) -> Self {
        info!(
            player_x = players.name(Mark::X),
            player_o = players.name(Mark::O),
            "Starting new session"
        );
        Self {
            players,
            board: Board::new(),
            turn: Mark::X,
            phase: Phase::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// Places the current turn's mark in the cell at `index` (0-8).
    ///
    /// Checks run in order: game still in progress, index in bounds,
    /// cell empty. A rejected move leaves the session unchanged.
    #[instrument(skip(self), fields(turn = %self.turn, move_count = self.history.len()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let position = LegalMove::check(index, self).inspect_err(|e| {
            warn!(index, error = %e, "Rejected move");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.turn;
        let applied = Move::new(mark, position);
        self.board.set(position, Square::Occupied(mark));
        self.history.push(applied);

        if let Some((winner, line)) = winning_line(&self.board) {
            self.phase = Phase::Won(winner);
            self.winning_line = Some(line);
            info!(
                winner = %winner,
                name = self.players.name(winner),
                line = %line,
                "Game won"
            );
        } else if is_full(&self.board) {
            self.phase = Phase::Tied;
            info!("Game tied");
        } else {
            self.turn = mark.opponent();
            debug!(next = %self.turn, "Turn passed");
        }

        // Postconditions only in debug builds
        #[cfg(debug_assertions)]
        {
            use crate::contracts::{Contract, MoveContract};
            if let Err(e) = MoveContract::post(&before, self) {
                warn!(error = %e, "Postcondition failed, rolling back move");
                *self = before;
                return Err(e);
            }
        }

        Ok(MoveOutcome {
            applied,
            phase: self.phase,
            winning_line: self.winning_line,
            move_count: self.history.len(),
        })
    }

    /// Clears the board for a rematch between the same players.
    ///
    /// The board empties, X moves first and the phase returns to
    /// `InProgress`. Player names are kept.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(self) -> Session {
        info!("Resetting session");
        Self::with_players(self.players)
    }

    /// Starts a session and plays the given cell indices in order.
    ///
    /// Stops at the first rejected move.
    #[instrument(skip(players))]
    pub fn replay(players: Players, indices: &[usize]) -> Result<Session, MoveError> {
        let mut session = Self::with_players(players);
        for &index in indices {
            session.apply_move(index)?;
        }
        Ok(session)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mark to move next. Frozen at the last mover once the game ends.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the player names.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Name of the player holding the mark.
    pub fn player_name(&self, mark: Mark) -> &str {
        self.players.name(mark)
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The completed line, once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Name of the winner, once the game is won.
    pub fn winner_name(&self) -> Option<&str> {
        self.phase.winner().map(|mark| self.players.name(mark))
    }

    /// Empty positions, or nothing once the game has ended.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.phase.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }
}
