//! Terminal-condition rules.
//!
//! Pure functions over a board. Only the mark that just moved is checked
//! for a completed line, since a mark cannot complete a line on the
//! opponent's turn.

pub mod win;

pub use win::{LINES, Line, winning_line};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Turn index of the ninth and final ply.
pub const FINAL_TURN: usize = 8;

/// Result of evaluating a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The mark completed a line.
    #[display("{} wins", _0)]
    Win(Mark),
    /// The board filled up without a line.
    #[display("Draw")]
    Draw,
    /// Play continues.
    #[display("Ongoing")]
    Ongoing,
}

impl Outcome {
    /// Checks if play must stop.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Evaluates the position right after `last_mover` played on `turn`.
///
/// `turn` is the 0-based index of that ply.
pub fn evaluate(board: &Board, last_mover: Mark, turn: usize) -> Outcome {
    if winning_line(board, last_mover).is_some() {
        Outcome::Win(last_mover)
    } else if turn == FINAL_TURN {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    fn play(moves: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for (turn, &(row, col)) in moves.iter().enumerate() {
            board.place(Move::new(row, col), Mark::for_turn(turn)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_row_is_ongoing() {
        let board = play(&[(1, 1)]);
        assert_eq!(evaluate(&board, Mark::Nought, 0), Outcome::Ongoing);
    }

    #[test]
    fn test_win_top_row() {
        // ○ ○ ○ / x x . / . . .
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(evaluate(&board, Mark::Nought, 4), Outcome::Win(Mark::Nought));
    }

    #[test]
    fn test_only_last_mover_is_checked() {
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(evaluate(&board, Mark::Cross, 4), Outcome::Ongoing);
    }

    #[test]
    fn test_draw_on_final_turn() {
        // ○ x ○ / ○ x x / x ○ ○
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board, Mark::Nought, FINAL_TURN), Outcome::Draw);
    }

    #[test]
    fn test_win_on_final_turn_beats_draw() {
        // ○ x ○ / x ○ x / x ○ ○  (main diagonal on the ninth ply)
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert_eq!(evaluate(&board, Mark::Nought, FINAL_TURN), Outcome::Win(Mark::Nought));
    }
}
