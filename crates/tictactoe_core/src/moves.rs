//! Move generation and board transitions.

use super::action::Action;
use super::error::MoveError;
use super::types::Board;
use tracing::{instrument, trace};

/// Returns every empty cell of `board` as a legal action.
///
/// Cells are listed in row-major order, so ties between equally good
/// actions are always broken the same way. An empty vector means the
/// board is full.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty(*action))
        .collect()
}

/// Returns the board that results from the player to move taking `action`.
///
/// The mark placed is `board.current_player()`, read before the move.
/// The input board is not modified.
///
/// # Errors
///
/// Returns [`MoveError::InvalidMove`] if the square is already occupied.
#[instrument(skip(board), fields(action = %action))]
pub fn apply_action(board: &Board, action: Action) -> Result<Board, MoveError> {
    if !board.is_empty(action) {
        return Err(MoveError::InvalidMove(action));
    }

    let player = board.current_player();
    trace!(%player, "Placing mark");
    Ok(board.with_mark(action, player))
}
