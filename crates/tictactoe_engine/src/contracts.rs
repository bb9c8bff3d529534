//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions always run; the session checks
//! postconditions in debug builds.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{MoveError, Position, Session};
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not been won or tied.
pub struct PhaseAcceptsMoves;

impl PhaseAcceptsMoves {
    /// Rejects with [`MoveError::GameOver`] once the phase is terminal.
    #[instrument(skip(session))]
    pub fn check(session: &Session) -> Result<(), MoveError> {
        if session.phase().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell index names a cell.
pub struct InBounds;

impl InBounds {
    /// Maps the index to its position or rejects with [`MoveError::OutOfBounds`].
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: the square at the position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`MoveError::CellOccupied`] if the cell holds a mark.
    #[instrument(skip(session))]
    pub fn check(position: Position, session: &Session) -> Result<(), MoveError> {
        if session.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Composite precondition: phase, then bounds, then occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the target position.
    #[instrument(skip(session))]
    pub fn check(index: usize, session: &Session) -> Result<Position, MoveError> {
        PhaseAcceptsMoves::check(session)?;
        let position = InBounds::check(index)?;
        CellIsEmpty::check(position, session)?;
        Ok(position)
    }
}

/// Contract for placing a mark by cell index.
///
/// Postconditions:
/// - exactly one move was appended to an unchanged history
/// - every session invariant holds
pub struct MoveContract;

impl Contract<Session, usize> for MoveContract {
    fn pre(session: &Session, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, session).map(|_| ())
    }

    fn post(before: &Session, after: &Session) -> Result<(), MoveError> {
        let grew_by_one = after.history().len() == before.history().len() + 1
            && after.history().starts_with(before.history());
        if !grew_by_one {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }
        if after.players() != before.players() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: player names changed during a move".to_string(),
            ));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
