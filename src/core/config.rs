//! Engine configuration.
//!
//! The board's dimensions are fixed for an engine's lifetime and are the
//! only thing a game configures. Field names serialize as `row` and
//! `column` so existing `{ "row": 30, "column": 30 }` documents load as-is.

use serde::{Deserialize, Serialize};

use crate::error::{FaritanyError, Result};

/// Default number of rows and columns.
pub const DEFAULT_DIMENSION: usize = 30;

/// Board configuration.
///
/// ```
/// use faritany::core::FaritanyConfig;
///
/// let config = FaritanyConfig::new().with_rows(5).with_columns(7);
/// assert_eq!(config.rows, 5);
/// assert_eq!(config.columns, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaritanyConfig {
    /// Number of rows.
    #[serde(rename = "row", default = "default_dimension")]
    pub rows: usize,

    /// Number of columns.
    #[serde(rename = "column", default = "default_dimension")]
    pub columns: usize,
}

fn default_dimension() -> usize {
    DEFAULT_DIMENSION
}

impl Default for FaritanyConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMENSION,
            columns: DEFAULT_DIMENSION,
        }
    }
}

impl FaritanyConfig {
    /// Create the default 30x30 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Square board of `size x size`.
    #[must_use]
    pub fn square(size: usize) -> Self {
        Self {
            rows: size,
            columns: size,
        }
    }

    /// Set the row count.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the column count.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Reject empty or overflowing boards.
    pub fn validate(&self) -> Result<()> {
        let ok = self.rows > 0
            && self.columns > 0
            && self.rows.checked_mul(self.columns).is_some();
        if ok {
            Ok(())
        } else {
            Err(FaritanyError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}
