//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): who has won, whether the
//! game is over, and what a finished game is worth.

pub mod terminal;
pub mod utility;
pub mod win;

pub use terminal::{is_full, is_terminal, outcome, Outcome};
pub use utility::{utility, Score};
pub use win::winning_mark;
