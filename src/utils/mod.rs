//! Output helpers shared by the renderer and the CLI

pub mod display;

pub use display::{Color, ColorOutput, GridFormatter};
