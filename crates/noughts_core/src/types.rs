//! Core domain types for noughts and crosses.

use super::action::{Move, MoveError};
use serde::{Deserialize, Serialize};

/// Mark placed by one side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Nought (moves first, even turn indices).
    #[display("○")]
    Nought,
    /// Cross (moves second, odd turn indices).
    #[display("x")]
    Cross,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Nought => Mark::Cross,
            Mark::Cross => Mark::Nought,
        }
    }

    /// Returns the mark that moves on the given 0-based turn index.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 {
            Mark::Nought
        } else {
            Mark::Cross
        }
    }

    /// Seat index of this mark: 0 for the first mover, 1 for the second.
    pub fn seat(self) -> usize {
        match self {
            Mark::Nought => 0,
            Mark::Cross => 1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// 3x3 board addressed by (row, col).
///
/// [`Board::place`] and [`Board::clear`] are the only mutating operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given move's coordinates, `None` if out of range.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row())?.get(mv.col()).copied()
    }

    /// Checks if the cell is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Places `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if the coordinates are off the board
    /// and [`MoveError::Occupied`] if the cell already holds a mark. The board
    /// is left untouched in both cases.
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(mv.row())
            .and_then(|row| row.get_mut(mv.col()))
            .ok_or(MoveError::OutOfRange {
                row: mv.row(),
                col: mv.col(),
            })?;
        if *cell != Cell::Empty {
            return Err(MoveError::Occupied(mv));
        }
        *cell = Cell::Occupied(mark);
        Ok(())
    }

    /// Restores an occupied cell to empty.
    ///
    /// Only used to take back a hypothetical move.
    ///
    /// # Panics
    ///
    /// Panics if the cell is off the board or already empty.
    pub fn clear(&mut self, mv: Move) {
        let cell = &mut self.cells[mv.row()][mv.col()];
        assert!(
            *cell != Cell::Empty,
            "cleared an empty cell at {mv}, backtracking out of step"
        );
        *cell = Cell::Empty;
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(move |&mv| self.is_empty(mv))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != Cell::Empty)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Occupied(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.count(Mark::Nought) + self.count(Mark::Cross)
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), 9);
        assert_eq!(board.occupied(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_sets_only_target_cell() {
        let mut board = Board::new();
        board.place(Move::new(1, 2), Mark::Cross).unwrap();
        assert_eq!(board.get(Move::new(1, 2)), Some(Cell::Occupied(Mark::Cross)));
        assert_eq!(board.occupied(), 1);
        assert_eq!(board.count(Mark::Cross), 1);
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(Move::new(1, 1), Mark::Nought).unwrap();
        let before = board;
        let result = board.place(Move::new(1, 1), Mark::Cross);
        assert_eq!(result, Err(MoveError::Occupied(Move::new(1, 1))));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(Move::new(3, 0), Mark::Nought),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(Move::new(0, 7), Mark::Nought),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = Board::new();
        board.place(Move::new(0, 0), Mark::Nought).unwrap();
        board.clear(Move::new(0, 0));
        assert_eq!(board, Board::new());
    }

    #[test]
    #[should_panic(expected = "cleared an empty cell")]
    fn test_clear_empty_cell_panics() {
        let mut board = Board::new();
        board.clear(Move::new(2, 2));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        board.place(Move::new(0, 1), Mark::Nought).unwrap();
        board.place(Move::new(1, 0), Mark::Cross).unwrap();
        board.place(Move::new(2, 2), Mark::Nought).unwrap();
        let empties: Vec<_> = board.empty_cells().collect();
        assert_eq!(
            empties,
            vec![
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(1, 1),
                Move::new(1, 2),
                Move::new(2, 0),
                Move::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_mark_for_turn_alternates() {
        assert_eq!(Mark::for_turn(0), Mark::Nought);
        assert_eq!(Mark::for_turn(1), Mark::Cross);
        assert_eq!(Mark::for_turn(8), Mark::Nought);
        assert_eq!(Mark::Nought.opponent(), Mark::Cross);
    }
}
