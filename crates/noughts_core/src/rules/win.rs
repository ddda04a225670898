//! Win detection.

use super::super::{Board, Cell, Mark, Move};

/// One of the eight lines that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    name: &'static str,
    cells: [Move; 3],
}

impl Line {
    const fn new(name: &'static str, cells: [Move; 3]) -> Self {
        Self { name, cells }
    }

    /// Display name, e.g. "top row".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The three cells of the line.
    pub fn cells(&self) -> [Move; 3] {
        self.cells
    }

    /// Checks if all three cells hold `mark`.
    pub fn is_complete(&self, board: &Board, mark: Mark) -> bool {
        self.cells
            .iter()
            .all(|&mv| board.get(mv) == Some(Cell::Occupied(mark)))
    }
}

/// Rows, columns and diagonals.
pub static LINES: [Line; 8] = [
    // Rows
    Line::new("top row", [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]),
    Line::new("middle row", [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)]),
    Line::new("bottom row", [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)]),
    // Columns
    Line::new("left column", [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)]),
    Line::new("center column", [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)]),
    Line::new("right column", [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)]),
    // Diagonals
    Line::new("main diagonal", [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)]),
    Line::new("anti-diagonal", [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)]),
];

/// Returns the first line completed by `mark`, if any.
pub fn winning_line(board: &Board, mark: Mark) -> Option<&'static Line> {
    LINES.iter().find(|line| line.is_complete(board, mark))
}
