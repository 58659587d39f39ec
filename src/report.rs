//! Command results and their text/JSON rendering.

use crate::config::{OutputFormat, SolverConfig};
use derive_more::{Display, Error, From};
use serde::Serialize;
use std::fmt::{self, Write};
use tictactoe_core::{
    action_values, apply_action, best_action, outcome, Action, Board, MoveError, Outcome, Player,
    Score,
};
use tracing::instrument;

/// A command result that can be printed as text or JSON.
pub trait Report: Serialize {
    /// Writes the report as human-readable text.
    fn write_text<W: Write>(&self, out: &mut W, show_board: bool) -> fmt::Result;

    /// Returns the report as human-readable text.
    fn to_text(&self, show_board: bool) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_text(&mut out, show_board)?;
        Ok(out)
    }
}

/// Error rendering a report.
#[derive(Debug, Display, Error, From)]
pub enum RenderError {
    /// Writing the text form failed.
    #[display("Failed to format report: {}", _0)]
    Text(fmt::Error),
    /// Serializing the JSON form failed.
    #[display("Failed to serialize report: {}", _0)]
    Json(serde_json::Error),
}

/// Renders `report` in the configured output format.
pub fn render<R: Report>(report: &R, config: &SolverConfig) -> Result<String, RenderError> {
    let rendered = match config.format() {
        OutputFormat::Text => report.to_text(*config.show_board())?,
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    };
    Ok(rendered)
}

fn write_board<W: Write>(out: &mut W, board: &Board) -> fmt::Result {
    writeln!(out, "{}\n", board)
}

/// Best action for the player to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The board that was searched.
    pub board: Board,
    /// Player to move.
    pub player: Player,
    /// Chosen action; `None` when the game is over.
    pub action: Option<Action>,
    /// Status of the searched board.
    pub outcome: Outcome,
}

impl Suggestion {
    /// Searches `board` for the best action.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            player: board.current_player(),
            action: best_action(&board),
            outcome: outcome(&board),
        }
    }
}

impl Report for Suggestion {
    fn write_text<W: Write>(&self, out: &mut W, show_board: bool) -> fmt::Result {
        if show_board {
            write_board(out, &self.board)?;
        }
        match self.action {
            Some(action) => write!(
                out,
                "{} to move: play {} ({})",
                self.player,
                action,
                action.label()
            ),
            None => write!(out, "Game over: {}", self.outcome),
        }
    }
}

/// One legal action and the score it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionValue {
    /// The action.
    pub action: Action,
    /// Minimax value after the action, from X's point of view.
    pub score: Score,
}

/// Minimax value of every legal action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The board that was searched.
    pub board: Board,
    /// Player to move.
    pub player: Player,
    /// Every legal action in row-major order.
    pub values: Vec<ActionValue>,
}

impl Analysis {
    /// Scores every legal action on `board`.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        let values = action_values(&board)
            .into_iter()
            .map(|(action, score)| ActionValue { action, score })
            .collect();
        Self {
            board,
            player: board.current_player(),
            values,
        }
    }
}

impl Report for Analysis {
    fn write_text<W: Write>(&self, out: &mut W, show_board: bool) -> fmt::Result {
        if show_board {
            write_board(out, &self.board)?;
        }
        if self.values.is_empty() {
            return write!(out, "Game over: {}", outcome(&self.board));
        }
        write!(out, "{} to move", self.player)?;
        for value in &self.values {
            write!(
                out,
                "\n  {} {:<13} {:>2}",
                value.action,
                value.action.label(),
                value.score
            )?;
        }
        Ok(())
    }
}

/// A move played during self-play and the board it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    /// Player who moved.
    pub player: Player,
    /// Cell played.
    pub action: Action,
    /// Board after the move.
    pub board: Board,
}

/// A game played perfectly by both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlay {
    /// Starting board.
    pub start: Board,
    /// Moves in the order played.
    pub moves: Vec<PlayedMove>,
    /// Final result.
    pub outcome: Outcome,
}

impl SelfPlay {
    /// Plays the best action for each side from `start` until the game ends.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from the transition; the search only picks
    /// empty squares, so this does not happen in practice.
    #[instrument(skip(start))]
    pub fn new(start: Board) -> Result<Self, MoveError> {
        let mut board = start;
        let mut moves = Vec::new();
        while let Some(action) = best_action(&board) {
            let player = board.current_player();
            board = apply_action(&board, action)?;
            moves.push(PlayedMove {
                player,
                action,
                board,
            });
        }
        Ok(Self {
            start,
            moves,
            outcome: outcome(&board),
        })
    }
}

impl Report for SelfPlay {
    fn write_text<W: Write>(&self, out: &mut W, show_board: bool) -> fmt::Result {
        if show_board {
            write_board(out, &self.start)?;
        }
        for (turn, played) in self.moves.iter().enumerate() {
            writeln!(
                out,
                "{}. {} plays {} ({})",
                turn + 1,
                played.player,
                played.action,
                played.action.label()
            )?;
            if show_board {
                write_board(out, &played.board)?;
            }
        }
        write!(out, "Result: {}", self.outcome)
    }
}
