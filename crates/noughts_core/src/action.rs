//! Moves and move errors.
//!
//! A move is a plain (row, col) value. Range and occupancy are checked
//! when it is placed, never when it is built.

use super::Mark;
use serde::{Deserialize, Serialize};

/// A cell coordinate to place a mark on.
///
/// Ordering is lexicographic on (row, col), which is also the row-major
/// order the search enumerates moves in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a move. Coordinates are not validated here.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a console cell number (1 = top-left, 9 = bottom-right).
    pub fn from_cell_number(number: usize) -> Option<Self> {
        match number {
            1..=9 => Some(Self::new((number - 1) / 3, (number - 1) % 3)),
            _ => None,
        }
    }

    /// Console cell number (1-9) of this move.
    pub fn cell_number(self) -> usize {
        self.row * 3 + self.col + 1
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Human-readable label, `None` if off the board.
    pub fn label(self) -> Option<&'static str> {
        let label = match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => return None,
        };
        Some(label)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),

    /// The coordinates are outside the 3x3 grid.
    #[display("Cell ({}, {}) is outside the board (0-2)", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The mark is not the side to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
