//! Tic-tac-toe engine - board state, turn order and session lifecycle.
//!
//! The engine is pure state-transition logic with no I/O. A presentation
//! layer collects two player names, forwards chosen cells and renders
//! whatever the engine reports back.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`] and the named [`Position`]s
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Session**: one game between two named players ([`Session`])
//! - **Engine**: lifecycle façade including name entry ([`Engine`])
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, Mark, Phase};
//!
//! let mut engine = Engine::new();
//! engine.initialize("Alice", "Bob").unwrap();
//!
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index).unwrap();
//! }
//!
//! assert_eq!(engine.phase(), Phase::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod phase;
mod players;
mod position;
mod rules;
mod session;
mod types;

pub use action::{Move, MoveError, ValidationError};
pub use contracts::{CellIsEmpty, Contract, InBounds, LegalMove, MoveContract, PhaseAcceptsMoves};
pub use engine::Engine;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, PhaseConsistentInvariant, SessionInvariants,
};
pub use phase::Phase;
pub use players::Players;
pub use position::Position;
pub use rules::{Line, LINES, check_winner, is_full, winning_line};
pub use session::{MoveOutcome, Session};
pub use types::{Board, Mark, Square};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;
