//! Core domain types for tic-tac-toe.

use super::action::Action;
use super::error::ParseBoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// Serializes as `null` for an empty square and as the player's mark otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Player>", into = "Option<Player>")]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl From<Option<Player>> for Square {
    fn from(mark: Option<Player>) -> Self {
        mark.map_or(Square::Empty, Square::Occupied)
    }
}

impl From<Square> for Option<Player> {
    fn from(square: Square) -> Self {
        match square {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// The board as three rows of three squares.
pub type Rows = [[Square; 3]; 3];

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition produces a new board and
/// leaves its input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Rows", into = "Rows")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows of squares.
    pub fn from_rows(rows: Rows) -> Self {
        let mut squares = [Square::Empty; 9];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * 3..row * 3 + 3].copy_from_slice(cells);
        }
        Self { squares }
    }

    /// Returns the board as three rows of three squares.
    pub fn rows(&self) -> Rows {
        let mut rows = [[Square::Empty; 3]; 3];
        for (index, square) in self.squares.iter().enumerate() {
            rows[index / 3][index % 3] = *square;
        }
        rows
    }

    /// Gets the square at the given action's cell.
    pub fn get(&self, action: Action) -> Square {
        self.squares[action.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of non-empty squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns the player whose turn it is, inferred from the mark counts.
    ///
    /// X moves first, so O is to move exactly when X has more marks on the
    /// board. Only meaningful for boards reached by alternating play; other
    /// boards still get an answer, but not a checked one.
    pub fn current_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Whether the mark counts could come from alternating play with X first.
    #[instrument(skip(self))]
    pub fn is_consistent(&self) -> bool {
        let x_count = self.count(Player::X);
        let o_count = self.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    /// Returns a copy of this board with `player`'s mark at `action`.
    ///
    /// Callers check that the square is empty.
    pub(crate) fn with_mark(mut self, action: Action, player: Player) -> Self {
        self.squares[action.index()] = Square::Occupied(player);
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Rows> for Board {
    fn from(rows: Rows) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Board> for Rows {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

/// Returns the starting board: every square empty, X to move.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on `board`.
pub fn current_player(board: &Board) -> Player {
    board.current_player()
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty squares shown by their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and the digits `1`-`9` are
    /// empty squares. Whitespace and the grid characters `|`, `/`, `-`, `+`
    /// are skipped, so the [`Display`](std::fmt::Display) output parses back.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '1'..='9' => Square::Empty,
                '|' | '/' | '-' | '+' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::InvalidCell(c)),
            };
            cells.push(square);
        }

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| ParseBoardError::WrongCellCount(cells.len()))?;
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_initial_state_is_empty_and_x_moves() {
        let board = initial_state();
        assert_eq!(board.occupied(), 0);
        assert_eq!(current_player(&board), Player::X);
    }

    #[test]
    fn test_o_moves_when_x_is_ahead() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.current_player(), Player::O);
    }

    #[test]
    fn test_unbalanced_board_still_answers() {
        // O ahead of X cannot happen in play; inference falls back to X.
        let board: Board = "OO.......".parse().unwrap();
        assert_eq!(board.current_player(), Player::X);
        assert!(!board.is_consistent());
    }

    #[test]
    fn test_consistency() {
        assert!(Board::new().is_consistent());
        assert!("X........".parse::<Board>().unwrap().is_consistent());
        assert!("XO.......".parse::<Board>().unwrap().is_consistent());
        assert!(!"XX.......".parse::<Board>().unwrap().is_consistent());
    }

    #[test]
    fn test_rows_round_trip() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let rows = board.rows();
        assert_eq!(rows[0][1], Square::Occupied(Player::O));
        assert_eq!(rows[1][1], Square::Occupied(Player::X));
        assert_eq!(rows[2][2], Square::Occupied(Player::O));
        assert_eq!(Board::from_rows(rows), board);
    }

    #[test]
    fn test_display() {
        let board: Board = "X.O......".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|O\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "XO./.X./O..".parse().unwrap();
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(2))
        );
        assert_eq!(
            "XO.......Z".parse::<Board>(),
            Err(ParseBoardError::InvalidCell('Z'))
        );
        assert_eq!(
            "..........".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(10))
        );
    }

    #[test]
    fn test_serde_as_rows() {
        let board: Board = "X.O/.../..X".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r#"[["X",null,"O"],[null,null,null],[null,null,"X"]]"#
        );
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
