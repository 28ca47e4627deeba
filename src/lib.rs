//! Conway's Game of Life on a fixed-size grid
//!
//! The [`game_of_life`] module holds the simulation core: cells with a
//! staging slot and a grid whose step stages every cell before committing
//! any. The [`simulation`] module wraps it in a paced driver and a text
//! renderer, configured through [`config::Settings`].

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{BoundaryCondition, Grid};
pub use simulation::{Simulation, StopReason};
