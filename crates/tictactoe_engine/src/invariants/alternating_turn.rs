//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{Mark, Session};

/// Invariant: Marks alternate and X moves first.
///
/// While the game is running the next turn follows from the history
/// length. Once it has ended the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        // X moves first, so X is never behind and never more than one ahead
        let board = session.board();
        let (xs, os) = (board.count(Mark::X), board.count(Mark::O));
        if xs != os && xs != os + 1 {
            return false;
        }

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.mark == if i % 2 == 0 { Mark::X } else { Mark::O });
        if !alternates {
            return false;
        }

        let expected_turn = match history.last() {
            Some(last) if session.phase().is_terminal() => last.mark,
            Some(last) => last.mark.opponent(),
            None => Mark::X,
        };

        session.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
