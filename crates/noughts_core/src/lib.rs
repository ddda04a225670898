//! Noughts and crosses game logic with a perfect opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s with placement and undo
//! - **Rules**: terminal evaluation against the eight fixed lines
//! - **Search**: exhaustive minimax over the remaining game tree
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameState, Mark, Move, Outcome, search};
//!
//! let mut state = GameState::new();
//! state.apply_player_move(Move::new(1, 1), Mark::Nought)?;
//! assert_eq!(state.evaluate(), Outcome::Ongoing);
//!
//! let reply = search::best_move(&mut state).expect("game is ongoing");
//! state.apply_player_move(reply, Mark::Cross)?;
//! # Ok::<(), noughts_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod rules;
pub mod search;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use rules::{Line, Outcome};
pub use search::SearchResult;
pub use state::GameState;
pub use types::{Board, Cell, Mark};
