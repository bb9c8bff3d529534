//! First-class invariants for a session.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and document the engine's
//! guarantees.

mod alternating_turn;
mod history_consistent;
mod monotonic_board;
mod phase_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use phase_consistent::PhaseConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every session invariant as one composable set.
pub type SessionInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    PhaseConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Players, Position, Session, Square};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = Session::initialize("Alice", "Bob").unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let players = Players::new("Alice", "Bob").unwrap();
        let session = Session::replay(players, &[0, 4, 2]).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut session = Session::initialize("Alice", "Bob").unwrap();
        session.apply_move(4).unwrap();
        // Board gains a mark the history never recorded
        session.board.set(Position::TopLeft, Square::Occupied(Mark::O));

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = Session::initialize("Alice", "Bob").unwrap();
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
