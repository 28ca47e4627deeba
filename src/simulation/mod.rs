//! Driving loop and presentation around the simulation core

pub mod driver;
pub mod render;

pub use driver::{Simulation, StopReason};
pub use render::{Renderer, TextRenderer};
