//! Error types for the simulation core

use thiserror::Error;

/// Failures raised by [`Grid`](crate::game_of_life::Grid) construction and accessors
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },
}
