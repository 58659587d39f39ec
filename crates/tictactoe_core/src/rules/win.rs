//! Win detection logic for tic-tac-toe.

use crate::action::Action;
use crate::types::{Board, Player, Square};

/// Board indices of every line, checked in this order: rows top to bottom,
/// columns left to right, then the main and anti diagonals.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark filling the first complete line, if any.
///
/// Only the first matching line counts. Boards from real play never have
/// two winners, but the scan order keeps the answer fixed for any input.
pub fn winning_mark(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let square = board.get(Action::ALL[a]);
        match square {
            Square::Occupied(player)
                if square == board.get(Action::ALL[b]) && square == board.get(Action::ALL[c]) =>
            {
                Some(player)
            }
            _ => None,
        }
    })
}
