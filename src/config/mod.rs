//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{
    parse_cell_list, CliOverrides, DisplayConfig, SeedConfig, Settings, SimulationConfig,
};
