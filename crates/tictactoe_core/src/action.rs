//! Actions: the cell a player places their mark in.

use serde::Serialize;

/// A cell on the board, addressed by 0-based row and column.
///
/// Both coordinates are always in `0..3`; the only ways to build an
/// action are the checked constructors and [`Action::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Action {
    row: u8,
    col: u8,
}

impl Action {
    /// All nine cells in row-major order.
    pub const ALL: [Action; 9] = [
        Action { row: 0, col: 0 },
        Action { row: 0, col: 1 },
        Action { row: 0, col: 2 },
        Action { row: 1, col: 0 },
        Action { row: 1, col: 1 },
        Action { row: 1, col: 2 },
        Action { row: 2, col: 0 },
        Action { row: 2, col: 1 },
        Action { row: 2, col: 2 },
    ];

    /// Creates an action, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self::ALL[row * 3 + col])
        } else {
            None
        }
    }

    /// Creates an action from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0-2.
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    /// Column, 0-2.
    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Row-major board index, 0-8.
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), index);
            assert_eq!(Action::from_index(index), Some(*action));
        }
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_new_checks_bounds() {
        let action = Action::new(1, 2).unwrap();
        assert_eq!((action.row(), action.col()), (1, 2));
        assert_eq!(action.index(), 5);
        assert_eq!(Action::new(3, 0), None);
        assert_eq!(Action::new(0, 3), None);
    }

    #[test]
    fn test_display_and_label() {
        let action = Action::new(1, 1).unwrap();
        assert_eq!(action.to_string(), "(1, 1)");
        assert_eq!(action.label(), "Center");
        assert_eq!(Action::new(2, 2).unwrap().label(), "Bottom-right");
    }
}
