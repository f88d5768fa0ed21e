//! Error types for the Faritany engine.

use thiserror::Error;

/// Errors reported by the engine's public operations.
///
/// Every failure is local to a single call: a rejected move or registration
/// leaves the board, scores and turn untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaritanyError {
    #[error("Invalid channel type: {0}")]
    InvalidChannel(String),

    #[error("Point ({row}, {column}) is outside the {rows}x{columns} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Point ({row}, {column}) is already occupied")]
    Occupied { row: usize, column: usize },

    #[error("Board dimensions must be non-zero, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Snapshot encoding error: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, FaritanyError>;
