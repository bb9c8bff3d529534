//! Draw detection logic for tic-tac-toe.

use crate::{Board, CELL_COUNT};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.filled() == CELL_COUNT
}
