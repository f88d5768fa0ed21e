//! Rules engine: move processing, loop detection and capture resolution.
//!
//! - `engine`: the `Faritany` engine and its move pipeline
//! - `cycles`: loop enumeration through a new stone
//! - `capture`: enclosed-stone detection for a loop
//! - `snapshot`: owned state copies for collaborators

pub mod capture;
pub mod cycles;
pub mod engine;
pub mod snapshot;

pub use capture::{centroid, enclosed_opponents, Capture};
pub use cycles::{traverse, Path, MIN_LOOP_LEN};
pub use engine::{Faritany, MoveOutcome};
pub use snapshot::Snapshot;
