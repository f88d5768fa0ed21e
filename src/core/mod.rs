//! Core types: players, scores, points, configuration.
//!
//! These are plain values shared by the board, the rules and the events.

pub mod config;
pub mod player;
pub mod point;

pub use config::{FaritanyConfig, DEFAULT_DIMENSION};
pub use player::{Player, Scores};
pub use point::Point;
