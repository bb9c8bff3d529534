//! Lifecycle phases of a game.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
///
/// ```text
/// AwaitingNames --initialize--> InProgress --win--> Won(mark)
///                               InProgress --full board--> Tied
/// Won | Tied --reset--> InProgress
/// any --new_game--> AwaitingNames
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No session yet; player names must be supplied.
    AwaitingNames,
    /// Moves are being accepted.
    InProgress,
    /// The player holding this mark completed a line.
    Won(Mark),
    /// Board filled with no line completed.
    Tied,
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Tied)
    }

    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Phase::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingNames => write!(f, "Awaiting player names"),
            Phase::InProgress => write!(f, "In progress"),
            Phase::Won(mark) => write!(f, "{} wins", mark),
            Phase::Tied => write!(f, "Tied"),
        }
    }
}
