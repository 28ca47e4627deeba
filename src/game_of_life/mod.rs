//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod rules;

pub use cell::Cell;
pub use grid::{BoundaryCondition, Grid};
pub use rules::GameOfLifeRules;
