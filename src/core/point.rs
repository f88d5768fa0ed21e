//! Grid coordinates.
//!
//! A `Point` is a `(row, column)` pair. Points are plain values; whether a
//! point lies on a particular board is decided by the board's dimensions
//! (see `Point::is_within`).

use serde::{Deserialize, Serialize};

/// A cell coordinate, 0-based, row first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Check that the point lies on a `rows x columns` grid.
    #[must_use]
    pub const fn is_within(self, rows: usize, columns: usize) -> bool {
        self.row < rows && self.column < columns
    }

    /// Offset by a signed delta, or `None` if either coordinate would go
    /// below zero. The upper bound is the caller's concern.
    #[must_use]
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            column: self.column.checked_add_signed(d_column)?,
        })
    }

    /// Row-major index on a grid with `columns` columns.
    #[must_use]
    pub const fn index(self, columns: usize) -> usize {
        self.row * columns + self.column
    }

    /// Check 8-neighbourhood adjacency (distinct points only).
    #[must_use]
    pub const fn touches(self, other: Point) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.column.abs_diff(other.column);
        dr <= 1 && dc <= 1 && (dr | dc) != 0
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
