//! Tic-tac-toe solver - perfect-play advice from the command line.
//!
//! A thin front end over [`tictactoe_core`]: parse a board, run the
//! exhaustive minimax search, print the result as text or JSON.
//!
//! # Example
//!
//! ```
//! use tictactoe_solver::{render, SolverConfig, Suggestion};
//!
//! let board = "XX./OO./X..".parse()?;
//! let text = render(&Suggestion::new(board), &SolverConfig::default())?;
//! assert!(text.ends_with("O to move: play (1, 2) (Middle-right)"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod logging;
mod report;

pub use cli::{Cli, Command};
pub use commands::execute;
pub use config::{ConfigError, OutputFormat, SolverConfig, DEFAULT_CONFIG_PATH};
pub use logging::{
    apply_config_filter, initial_filter, subscriber, FilterHandle, DEFAULT_LOG_FILTER,
};
pub use report::{
    render, ActionValue, Analysis, PlayedMove, RenderError, Report, SelfPlay, Suggestion,
};
