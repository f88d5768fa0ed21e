//! Board store: the grid of stones and its signed-code view.

pub mod grid;
pub mod stone;

pub use grid::{Board, Neighbours, NEIGHBOUR_OFFSETS, ORTHOGONAL_OFFSETS};
pub use stone::{cell_code, Stone};
