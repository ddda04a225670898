//! Game state threaded through the turn loop.

use super::rules::{self, Outcome};
use super::{Board, Mark, Move, MoveError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Board plus turn bookkeeping for one game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    /// Plies applied so far; also the turn index of the next ply.
    pub(crate) plies: usize,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays `moves` from a fresh game, alternating marks from the first mover.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    pub fn from_moves(moves: &[Move]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for &mv in moves {
            state.apply_player_move(mv, state.side_to_move())?;
        }
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of plies played.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Turn index of the most recent ply, `None` before the first move.
    pub fn last_turn(&self) -> Option<usize> {
        self.plies.checked_sub(1)
    }

    /// Mark that made the most recent ply.
    pub fn last_mover(&self) -> Option<Mark> {
        self.last_turn().map(Mark::for_turn)
    }

    /// Mark to play next.
    pub fn side_to_move(&self) -> Mark {
        Mark::for_turn(self.plies)
    }

    /// Moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies one ply for `mark`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::WrongTurn`] if `mark` is not the side to move.
    /// - [`MoveError::OutOfRange`] or [`MoveError::Occupied`] from the board.
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(plies = self.plies))]
    pub fn apply_player_move(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        if self.evaluate().is_terminal() {
            warn!(%mv, "Move after game over");
            return Err(MoveError::GameOver);
        }
        if mark != self.side_to_move() {
            warn!(%mv, %mark, "Move out of turn");
            return Err(MoveError::WrongTurn(mark));
        }
        self.board.place(mv, mark).inspect_err(|e| {
            warn!(%mv, error = %e, "Move rejected");
        })?;
        self.plies += 1;
        self.history.push(mv);
        debug!(%mv, %mark, plies = self.plies, "Move applied");
        Ok(())
    }

    /// Evaluates the position after the most recent ply.
    pub fn evaluate(&self) -> Outcome {
        match (self.last_mover(), self.last_turn()) {
            (Some(mark), Some(turn)) => rules::evaluate(&self.board, mark, turn),
            _ => Outcome::Ongoing,
        }
    }
}
