//! Command-line interface for tictactoe_solver.

use clap::{Parser, Subcommand};
use tictactoe_core::Board;

/// Tic-tac-toe solver - perfect-play advice by exhaustive minimax
#[derive(Parser, Debug)]
#[command(name = "tictactoe_solver")]
#[command(about = "Perfect-play advisor for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Print JSON instead of text (overrides the configured format)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` or `_` for
/// empty. Row separators `/` and `|` are ignored, e.g. `XX./OO./...`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the best action for the player to move
    Suggest {
        /// Board to analyze
        board: Board,
    },

    /// Print the minimax value of every legal action
    Analyze {
        /// Board to analyze
        board: Board,
    },

    /// Play perfectly for both sides until the game ends
    Selfplay {
        /// Starting board (defaults to the empty board)
        board: Option<Board>,
    },
}
