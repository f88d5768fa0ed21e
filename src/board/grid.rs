//! The board store.
//!
//! Cells are kept row-major in a single `Vec`. Every access is bounds
//! checked: out-of-range coordinates produce `FaritanyError::OutOfBounds`
//! instead of touching a neighbouring row.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::stone::{cell_code, Stone};
use crate::core::{Player, Point};
use crate::error::{FaritanyError, Result};

/// 8-neighbourhood offsets as `(d_row, d_column)`.
///
/// Order is columns right-to-left, rows bottom-to-top within a column. Cycle
/// enumeration visits neighbours in this order, so it fixes the order in
/// which equal-length loops are reported.
pub const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (1, 1),
    (0, 1),
    (-1, 1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// 4-neighbourhood offsets used for filling: down, up, right, left.
pub const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Neighbour lists rarely exceed eight entries.
pub type Neighbours = SmallVec<[Point; 8]>;

/// Fixed-size grid of optional stones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Option<Stone>>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. Use `FaritanyConfig::validate`
    /// to check untrusted dimensions first.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "Board must have at least one cell");
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check whether a point lies on this board.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.is_within(self.rows, self.columns)
    }

    /// Row-major index of a point, or `OutOfBounds`.
    pub fn index_of(&self, point: Point) -> Result<usize> {
        if self.contains(point) {
            Ok(point.index(self.columns))
        } else {
            Err(FaritanyError::OutOfBounds {
                row: point.row,
                column: point.column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// The stone at a point, if any.
    pub fn get(&self, point: Point) -> Result<Option<Stone>> {
        Ok(self.cells[self.index_of(point)?])
    }

    /// Signed code of a point.
    pub fn code(&self, point: Point) -> Result<i8> {
        self.get(point).map(cell_code)
    }

    /// Write a stone to a point.
    ///
    /// Does not check occupancy; that is the move processor's job.
    pub fn set(&mut self, point: Point, stone: Stone) -> Result<()> {
        let index = self.index_of(point)?;
        self.cells[index] = Some(stone);
        Ok(())
    }

    /// Mark the stone at a point as captured.
    ///
    /// Returns `false` if the cell is empty or already captured.
    pub fn capture(&mut self, point: Point) -> Result<bool> {
        let index = self.index_of(point)?;
        match self.cells[index] {
            Some(stone) if !stone.captured => {
                self.cells[index] = Some(stone.into_captured());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Signed code of a point already known to be on the board.
    fn code_at(&self, point: Point) -> i8 {
        cell_code(self.cells[point.index(self.columns)])
    }

    /// In-bounds neighbours of a point under the given offsets.
    pub fn neighbours<'a>(
        &'a self,
        point: Point,
        offsets: &'a [(isize, isize)],
    ) -> impl Iterator<Item = Point> + 'a {
        offsets
            .iter()
            .filter_map(move |&(dr, dc)| point.offset(dr, dc))
            .filter(move |p| self.contains(*p))
    }

    /// 8-neighbours whose code is identical to this point's code.
    ///
    /// Identical means same owner and same capture state.
    #[must_use]
    pub fn same_code_neighbours(&self, point: Point) -> Neighbours {
        if !self.contains(point) {
            return Neighbours::new();
        }
        let code = self.code_at(point);
        self.neighbours(point, &NEIGHBOUR_OFFSETS)
            .filter(|p| self.code_at(*p) == code)
            .collect()
    }

    /// Flat row-major snapshot of every cell code.
    #[must_use]
    pub fn disposition(&self) -> Vec<i8> {
        self.cells.iter().copied().map(cell_code).collect()
    }

    /// Iterate over occupied cells.
    pub fn stones(&self) -> impl Iterator<Item = (Point, Stone)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|stone| (Point::new(i / columns, i % columns), stone))
        })
    }

    /// Count a player's stones in a given capture state.
    #[must_use]
    pub fn count(&self, owner: Player, captured: bool) -> usize {
        self.stones()
            .filter(|(_, s)| s.owner == owner && s.captured == captured)
            .count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}
