//! Moves and the errors that reject them.
//!
//! Moves are domain events, not side effects. The session records
//! every accepted move so its history can be checked against the board.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    /// The name for the player holding this mark was blank.
    #[display("Please enter both player names (name for {} is empty)", _0)]
    EmptyName(#[error(not(source))] Mark),
}

/// Error applying a move. A rejected move leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// No game is running; player names are needed first.
    #[display("No game in progress; enter player names first")]
    InvalidPhase,

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
