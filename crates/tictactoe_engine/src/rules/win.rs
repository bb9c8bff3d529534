//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions in a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether the line passes through the position.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} / {} / {}", a, b, c)
    }
}

/// The eight winning lines, scanned in this order.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line and the mark that completed it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let mark = board.get(a).mark()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((mark, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, Square::Occupied(*mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board).map(|(_, l)| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        assert_eq!(
            winning_line(&board).map(|(m, l)| (m, l.indices())),
            Some((Mark::O, [2, 4, 6]))
        );
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let marks: Vec<_> = line.positions().iter().map(|p| (*p, Mark::O)).collect();
            let board = board_with(&marks);
            assert_eq!(winning_line(&board), Some((Mark::O, line)));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }
}
