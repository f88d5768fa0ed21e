//! Read-only game snapshots for collaborators.
//!
//! A `Snapshot` is everything a renderer needs to redraw the board: the
//! dimensions, the flat disposition of signed codes, both scores and whose
//! turn it is. It owns its data and never aliases engine state.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Point, Scores};
use crate::error::{FaritanyError, Result};

/// Owned copy of the observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: usize,
    pub columns: usize,
    /// Row-major signed cell codes.
    pub disposition: Vec<i8>,
    pub scores: Scores,
    pub current_player: Player,
}

impl Snapshot {
    /// Code at a point, or `None` off the board.
    #[must_use]
    pub fn code(&self, point: Point) -> Option<i8> {
        if point.is_within(self.rows, self.columns) {
            self.disposition.get(point.index(self.columns)).copied()
        } else {
            None
        }
    }

    /// Binary encoding for handing the snapshot to another process.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| FaritanyError::Encoding(e.to_string()))
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| FaritanyError::Encoding(e.to_string()))
    }
}
