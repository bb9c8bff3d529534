//! Phase consistency invariant: the phase agrees with the board.

use super::Invariant;
use crate::rules::{is_full, winning_line};
use crate::{Phase, Session};

/// Invariant: The phase is what the rules say about the board.
///
/// - a completed line means `Won` by that line's mark, with the line recorded
/// - a full board without a line means `Tied`
/// - anything else means `InProgress`
pub struct PhaseConsistentInvariant;

impl Invariant<Session> for PhaseConsistentInvariant {
    fn holds(session: &Session) -> bool {
        match winning_line(session.board()) {
            Some((mark, line)) => {
                session.phase() == Phase::Won(mark) && session.winning_line() == Some(line)
            }
            None if is_full(session.board()) => {
                session.phase() == Phase::Tied && session.winning_line().is_none()
            }
            None => session.phase() == Phase::InProgress && session.winning_line().is_none(),
        }
    }

    fn description() -> &'static str {
        "Phase matches the board (win before tie)"
    }
}
