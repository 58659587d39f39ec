//! Scoring of finished games from X's point of view.

use super::win::winning_mark;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Value of a finished game for X.
///
/// Ordered so that X maximizes and O minimizes: `OWins < Draw < XWins`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
pub enum Score {
    /// O won (-1).
    #[strum(to_string = "-1")]
    OWins,
    /// Nobody won (0).
    #[strum(to_string = "0")]
    Draw,
    /// X won (+1).
    #[strum(to_string = "+1")]
    XWins,
}

impl Score {
    /// The score as -1, 0 or +1.
    pub fn value(self) -> i8 {
        match self {
            Score::OWins => -1,
            Score::Draw => 0,
            Score::XWins => 1,
        }
    }

    /// The score a win by `player` is worth.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Score::XWins,
            Player::O => Score::OWins,
        }
    }
}

/// Scores a terminal board: +1 if X won, -1 if O won, 0 otherwise.
///
/// A board that is not terminal also scores 0; callers check
/// [`is_terminal`](super::is_terminal) first.
pub fn utility(board: &Board) -> Score {
    winning_mark(board).map_or(Score::Draw, Score::win_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_x_line_scores_plus_one() {
        assert_eq!(utility(&board("X.O/XO./X..")), Score::XWins);
        assert_eq!(Score::XWins.value(), 1);
    }

    #[test]
    fn test_o_line_scores_minus_one() {
        assert_eq!(utility(&board("XXO/XO./O..")), Score::OWins);
        assert_eq!(Score::OWins.value(), -1);
    }

    #[test]
    fn test_full_board_without_line_scores_zero() {
        assert_eq!(utility(&board("XOX/OXX/OXO")), Score::Draw);
        assert_eq!(Score::Draw.value(), 0);
    }

    #[test]
    fn test_unfinished_board_scores_zero() {
        let b = board("XX./OO./...");
        assert!(!crate::rules::is_terminal(&b));
        assert_eq!(utility(&b), Score::Draw);
        assert_eq!(utility(&Board::new()), Score::Draw);
    }

    #[test]
    fn test_ordering_matches_values() {
        assert!(Score::OWins < Score::Draw);
        assert!(Score::Draw < Score::XWins);
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::XWins.to_string(), "+1");
        assert_eq!(Score::OWins.to_string(), "-1");
    }
}
