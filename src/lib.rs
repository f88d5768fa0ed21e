//! # faritany
//!
//! Rule engine for Faritany, a two-player territorial-capture board game.
//!
//! Players alternately place stones on a fixed grid. When a new stone closes
//! a loop of at least four of its owner's stones (8-connected), every active
//! opponent stone inside the loop is captured and scored. Captured stones
//! stay on the board for good. A move that captures lets the mover play
//! again; any other move passes the turn.
//!
//! ## Architecture
//!
//! - **Board store**: `Stone { owner, captured }` per cell, exposed to
//!   collaborators as signed codes (`0`, `±1`, `±2`).
//!
//! - **Loop detection**: exhaustive backtracking over same-code neighbours,
//!   run on an explicit stack.
//!
//! - **Capture**: flood fill from each loop's centroid, shortest loops
//!   first.
//!
//! - **Events**: five named channels with one synchronous handler each.
//!
//! ## Modules
//!
//! - `core`: players, scores, points, configuration
//! - `board`: the grid and its stones
//! - `rules`: the `Faritany` engine, loop detection, capture
//! - `events`: event kinds and handler dispatch
//! - `error`: crate error type

pub mod board;
pub mod core;
pub mod error;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{FaritanyConfig, Player, Point, Scores};

pub use crate::board::{Board, Stone};

pub use crate::error::{FaritanyError, Result};

pub use crate::events::{EventChannel, EventHandler, EventKind, GameEvent};

pub use crate::rules::{Capture, Faritany, MoveOutcome, Path, Snapshot};
