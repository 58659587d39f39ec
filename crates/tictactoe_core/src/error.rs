//! Error types for the tic-tac-toe core.

use super::action::Action;

/// Error returned when applying an action to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The targeted square already holds a mark.
    #[display("Invalid move: square {} is already occupied", _0)]
    InvalidMove(#[error(not(source))] Action),
}

/// Error returned when parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// The text contained a character that is neither a mark nor an empty cell.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(#[error(not(source))] char),
}
