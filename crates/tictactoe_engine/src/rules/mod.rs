//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! board storage so the session and the contracts can share them.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{Line, LINES, check_winner, winning_line};
