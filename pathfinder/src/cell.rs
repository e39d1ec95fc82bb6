use std::fmt;

use serde::Serialize;

/// A (row, column) position in a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    pub const fn is_origin(&self) -> bool {
        self.row == 0 && self.column == 0
    }

    /// Cell directly above, if any.
    pub fn above(&self) -> Option<Cell> {
        self.row.checked_sub(1).map(|row| Cell::new(row, self.column))
    }

    /// Cell directly to the left, if any.
    pub fn left(&self) -> Option<Cell> {
        self.column.checked_sub(1).map(|column| Cell::new(self.row, column))
    }

    /// Manhattan distance from the origin.
    pub const fn rank(&self) -> usize {
        self.row + self.column
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
