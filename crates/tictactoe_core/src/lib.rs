//! Pure tic-tac-toe rules and perfect-play search.
//!
//! Everything here is a function of an immutable [`Board`] value:
//!
//! - **Board model**: [`Board`], [`Player`], [`Square`] and turn inference
//!   via [`current_player`]
//! - **Moves**: [`legal_actions`] and [`apply_action`]
//! - **Rules**: [`winning_mark`], [`is_terminal`], [`outcome`], [`utility`]
//! - **Search**: [`best_action`] by exhaustive minimax
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{apply_action, best_action, initial_state, is_terminal, utility, Score};
//!
//! let mut board = initial_state();
//! while let Some(action) = best_action(&board) {
//!     board = apply_action(&board, action)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), Score::Draw);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod moves;
mod rules;
mod search;
mod types;

pub use action::Action;
pub use error::{MoveError, ParseBoardError};
pub use moves::{apply_action, legal_actions};
pub use rules::{is_full, is_terminal, outcome, utility, winning_mark, Outcome, Score};
pub use search::{action_values, best_action, max_value, min_value, principal_variation};
pub use types::{current_player, initial_state, Board, Player, Rows, Square};
