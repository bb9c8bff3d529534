//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::Session;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        session.history().len() == session.board().filled()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
