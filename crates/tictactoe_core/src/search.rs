//! Exhaustive minimax search.
//!
//! The whole game tree below a board is walked on every query. There is no
//! pruning and no memoization: from the empty board the tree has at most
//! 9! leaf paths, which is small enough to enumerate outright.

use super::action::Action;
use super::moves::legal_actions;
use super::rules::{is_terminal, utility, Score};
use super::types::{Board, Player};
use tracing::{debug, instrument};

/// Walks the game tree and counts the positions it visits.
#[derive(Debug, Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Best score X can guarantee with X to move.
    fn max_value(&mut self, board: &Board) -> Score {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        let mut best = Score::OWins;
        for next in successors(board) {
            best = best.max(self.min_value(&next));
        }
        best
    }

    /// Best score O can guarantee with O to move.
    fn min_value(&mut self, board: &Board) -> Score {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        let mut best = Score::XWins;
        for next in successors(board) {
            best = best.min(self.max_value(&next));
        }
        best
    }

    /// Value of the board after `action`, with the opponent to reply.
    fn value_after(&mut self, board: &Board, action: Action, mover: Player) -> Score {
        let next = board.with_mark(action, mover);
        match mover {
            Player::X => self.min_value(&next),
            Player::O => self.max_value(&next),
        }
    }
}

/// Boards reachable in one move, in row-major action order.
fn successors(board: &Board) -> impl Iterator<Item = Board> + '_ {
    let mover = board.current_player();
    legal_actions(board)
        .into_iter()
        .map(move |action| board.with_mark(action, mover))
}

/// Returns the best score X can guarantee from `board`.
pub fn max_value(board: &Board) -> Score {
    Minimax::default().max_value(board)
}

/// Returns the best score O can guarantee from `board`.
pub fn min_value(board: &Board) -> Score {
    Minimax::default().min_value(board)
}

/// Returns the optimal action for the player to move, or `None` if the game is over.
///
/// Selection goes in tiers. The mover first looks for any action that
/// forces a win, then any that forces a draw, and takes the first match in
/// row-major order. If neither exists the first legal action is returned,
/// since every action loses. Each tier evaluates the actions afresh.
#[instrument(skip(board), fields(player = tracing::field::Empty))]
pub fn best_action(board: &Board) -> Option<Action> {
    if is_terminal(board) {
        debug!("Board is terminal, no action to choose");
        return None;
    }

    let mover = board.current_player();
    tracing::Span::current().record("player", tracing::field::display(mover));

    let actions = legal_actions(board);
    let mut search = Minimax::default();

    for target in [Score::win_for(mover), Score::Draw] {
        for &action in &actions {
            if search.value_after(board, action, mover) == target {
                debug!(%action, score = %target, nodes = search.nodes, "Chose action");
                return Some(action);
            }
        }
    }

    let fallback = actions.first().copied();
    debug!(
        action = ?fallback,
        winner = %mover.opponent(),
        nodes = search.nodes,
        "Every action loses, taking the first"
    );
    fallback
}

/// Scores every legal action by the value of the board it leads to.
///
/// Actions come back in row-major order. A terminal board has no actions.
#[instrument(skip(board))]
pub fn action_values(board: &Board) -> Vec<(Action, Score)> {
    if is_terminal(board) {
        return Vec::new();
    }

    let mover = board.current_player();
    let mut search = Minimax::default();
    let values: Vec<_> = legal_actions(board)
        .into_iter()
        .map(|action| (action, search.value_after(board, action, mover)))
        .collect();
    debug!(actions = values.len(), nodes = search.nodes, "Scored actions");
    values
}

/// Plays [`best_action`] for both sides until the game ends.
///
/// Returns the actions in the order they are played; empty if `board`
/// is already terminal.
#[instrument(skip(board))]
pub fn principal_variation(board: &Board) -> Vec<Action> {
    let mut line = Vec::new();
    let mut current = *board;
    while let Some(action) = best_action(&current) {
        current = current.with_mark(action, current.current_player());
        line.push(action);
    }
    debug!(length = line.len(), "Principal variation complete");
    line
}
