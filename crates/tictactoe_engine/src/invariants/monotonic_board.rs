//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, Session, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never touch an
/// occupied square and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Session> for MonotonicBoardInvariant {
    fn holds(session: &Session) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.mark));
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
