//! Exhaustive minimax search.
//!
//! The search mutates the game's own board in place and restores every
//! placement before trying the next sibling, so the board is identical
//! before and after a call. Candidate moves are tried in row-major order
//! and only a strictly better score replaces the current choice, so the
//! first of several equally good moves wins.

use super::rules::{self, Outcome};
use super::{Board, GameState, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Position value from the searching side's point of view.
pub type Score = i8;

/// Searching side wins.
pub const WIN: Score = 1;
/// Neither side can force a win.
pub const DRAW: Score = 0;
/// Opponent wins.
pub const LOSS: Score = -1;

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Value under optimal play by both sides.
    pub value: Score,
    /// First move achieving `value`, `None` if the game is over.
    pub best_move: Option<Move>,
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Returns the optimal move for the side to move, `None` if the game is over.
pub fn best_move(state: &mut GameState) -> Option<Move> {
    analyze(state).best_move
}

/// Searches the full game tree for the side to move.
#[instrument(skip(state), fields(plies = state.plies()))]
pub fn analyze(state: &mut GameState) -> SearchResult {
    let mut search = Minimax::new(state.side_to_move());
    let result = match state.evaluate() {
        Outcome::Ongoing => search.root(&mut state.board, state.plies),
        outcome => SearchResult {
            value: search.score(outcome).unwrap_or(DRAW),
            best_move: None,
            nodes: 0,
        },
    };
    debug!(
        ai = %search.ai,
        value = result.value,
        best_move = ?result.best_move,
        nodes = result.nodes,
        "Search complete"
    );
    result
}

/// Search context with a fixed maximizing side.
struct Minimax {
    ai: Mark,
    nodes: u64,
}

impl Minimax {
    fn new(ai: Mark) -> Self {
        Self { ai, nodes: 0 }
    }

    /// Tries the searching side's move on `turn` at every empty cell.
    fn root(&mut self, board: &mut Board, turn: usize) -> SearchResult {
        let mut best: Option<(Move, Score)> = None;
        for mv in Move::ALL {
            // Occupied cells are skipped.
            if board.place(mv, self.ai).is_err() {
                continue;
            }
            let score = self.minimax(board, turn);
            board.clear(mv);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        SearchResult {
            value: best.map_or(DRAW, |(_, score)| score),
            best_move: best.map(|(mv, _)| mv),
            nodes: self.nodes,
        }
    }

    /// Value of the position reached by the ply on `turn`.
    fn minimax(&mut self, board: &mut Board, turn: usize) -> Score {
        self.nodes += 1;
        let outcome = rules::evaluate(board, Mark::for_turn(turn), turn);
        if let Some(score) = self.score(outcome) {
            return score;
        }

        let next = turn + 1;
        let side = Mark::for_turn(next);
        let maximizing = side == self.ai;
        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        for mv in Move::ALL {
            if board.place(mv, side).is_err() {
                continue;
            }
            let score = self.minimax(board, next);
            board.clear(mv);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// Score of a terminal outcome, `None` while play continues.
    fn score(&self, outcome: Outcome) -> Option<Score> {
        match outcome {
            Outcome::Win(mark) if mark == self.ai => Some(WIN),
            Outcome::Win(_) => Some(LOSS),
            Outcome::Draw => Some(DRAW),
            Outcome::Ongoing => None,
        }
    }
}
