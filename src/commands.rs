//! Command dispatch.

use crate::cli::Command;
use crate::config::SolverConfig;
use crate::report::{render, Analysis, SelfPlay, Suggestion};
use anyhow::Result;
use tictactoe_core::Board;
use tracing::{info, instrument, warn};

/// Runs `command` and returns the rendered output.
#[instrument(skip(config))]
pub fn execute(command: Command, config: &SolverConfig) -> Result<String> {
    let output = match command {
        Command::Suggest { board } => {
            check_board(&board);
            render(&Suggestion::new(board), config)?
        }
        Command::Analyze { board } => {
            check_board(&board);
            render(&Analysis::new(board), config)?
        }
        Command::Selfplay { board } => {
            let board = board.unwrap_or_default();
            check_board(&board);
            let game = SelfPlay::new(board)?;
            info!(moves = game.moves.len(), outcome = %game.outcome, "Self-play finished");
            render(&game, config)?
        }
    };
    Ok(output)
}

/// Warns when the board could not have come from alternating play.
///
/// The search still runs; turn inference just may not mean much.
fn check_board(board: &Board) {
    if !board.is_consistent() {
        warn!(
            x_count = board.count(tictactoe_core::Player::X),
            o_count = board.count(tictactoe_core::Player::O),
            "Board is not reachable by alternating play, results may be meaningless"
        );
    }
}
