//! Terminal detection: wins, full boards and game outcomes.

use super::win::winning_mark;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Where a game stands on a given board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still going.
    InProgress,
    /// Player completed a line.
    Winner(Player),
    /// The board filled up with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Returns true if someone has won or no empty square remains.
pub fn is_terminal(board: &Board) -> bool {
    winning_mark(board).is_some() || is_full(board)
}

/// Classifies the board as won, drawn or still in progress.
pub fn outcome(board: &Board) -> Outcome {
    match winning_mark(board) {
        Some(player) => Outcome::Winner(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
