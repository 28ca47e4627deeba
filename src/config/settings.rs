//! Configuration settings for the simulation driver

use crate::game_of_life::BoundaryCondition;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seed: SeedConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub boundary_condition: BoundaryCondition,
    /// Pause between generations
    pub tick_interval_ms: u64,
    /// Stop after this many generations; run until stopped otherwise
    pub max_generations: Option<u64>,
    pub stop_when_extinct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Initially live cells as `(row, col)`
    pub live_cells: Vec<(isize, isize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub live_glyph: char,
    pub dead_glyph: char,
    pub clear_screen: bool,
    pub show_coordinates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 48,
                cols: 48,
                boundary_condition: BoundaryCondition::Dead,
                tick_interval_ms: 100,
                max_generations: None,
                stop_when_extinct: false,
            },
            seed: SeedConfig {
                // Glider heading towards the bottom-right corner
                live_cells: vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            },
            display: DisplayConfig {
                live_glyph: '█',
                dead_glyph: '·',
                clear_screen: true,
                show_coordinates: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Only parsing happens here; call [`Settings::validate`] once any
    /// command line overrides have been merged.
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if sim.rows == 0 || sim.cols == 0 {
            anyhow::bail!("Grid dimensions must be positive, got {}x{}", sim.rows, sim.cols);
        }

        if sim.max_generations == Some(0) {
            anyhow::bail!("Maximum generations must be positive when set");
        }

        for &(row, col) in &self.seed.live_cells {
            if row < 0 || col < 0 || row as usize >= sim.rows || col as usize >= sim.cols {
                anyhow::bail!(
                    "Seed cell ({}, {}) lies outside the {}x{} grid",
                    row,
                    col,
                    sim.rows,
                    sim.cols
                );
            }
        }

        if self.display.live_glyph == self.display.dead_glyph {
            anyhow::bail!("Live and dead glyphs must differ");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.simulation.cols = cols;
        }
        if let Some(wrap) = cli_overrides.wrap {
            self.simulation.boundary_condition = wrap.into();
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(ref cells) = cli_overrides.live_cells {
            self.seed.live_cells = cells.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub wrap: Option<bool>,
    pub tick_interval_ms: Option<u64>,
    pub max_generations: Option<u64>,
    pub live_cells: Option<Vec<(isize, isize)>>,
}

/// Parse a live-cell list of the form `"r,c;r,c;..."`
pub fn parse_cell_list(input: &str) -> Result<Vec<(isize, isize)>> {
    input
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<(isize, isize)> {
            let (row, col) = pair
                .split_once(',')
                .with_context(|| format!("Expected 'row,col', got '{}'", pair))?;
            let row = row
                .trim()
                .parse()
                .with_context(|| format!("Invalid row in '{}'", pair))?;
            let col = col
                .trim()
                .parse()
                .with_context(|| format!("Invalid column in '{}'", pair))?;
            Ok((row, col))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.simulation.rows, 48);
        assert_eq!(settings.simulation.tick_interval_ms, 100);
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested/config.yaml");

        let mut settings = Settings::default();
        settings.simulation.boundary_condition = BoundaryCondition::Wrap;
        settings.simulation.max_generations = Some(12);
        settings.to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("boundary_condition: wrap"));

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_overrides_can_repair_loaded_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("small.yaml");

        let mut settings = Settings::default();
        settings.simulation.rows = 4;
        settings.simulation.cols = 4;
        settings.seed.live_cells = vec![(10, 10)];
        settings.to_file(&path).unwrap();

        let mut loaded = Settings::from_file(&path).unwrap();
        assert!(loaded.validate().is_err());

        loaded.merge_with_cli(&CliOverrides {
            rows: Some(12),
            cols: Some(12),
            ..Default::default()
        });
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.rows = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed.live_cells.push((48, 0));
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed.live_cells.push((-1, 3));
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.max_generations = Some(0);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.tick_interval_ms = 0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_file_rejects_invalid_yaml() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        std::fs::write(&path, "simulation: [not, a, map]\n").unwrap();

        assert!(Settings::from_file(&path).is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            rows: Some(10),
            wrap: Some(true),
            live_cells: Some(vec![(1, 1)]),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.rows, 10);
        assert_eq!(settings.simulation.cols, 48);
        assert_eq!(settings.simulation.boundary_condition, BoundaryCondition::Wrap);
        assert_eq!(settings.seed.live_cells, vec![(1, 1)]);
        assert_eq!(settings.simulation.max_generations, None);
    }

    #[test]
    fn test_parse_cell_list() {
        assert_eq!(parse_cell_list("1,2; 3,4").unwrap(), vec![(1, 2), (3, 4)]);
        assert_eq!(parse_cell_list(" 0 , 5 ;").unwrap(), vec![(0, 5)]);
        assert!(parse_cell_list("").unwrap().is_empty());
        assert_eq!(parse_cell_list("-1,2").unwrap(), vec![(-1, 2)]);

        assert!(parse_cell_list("1;2").is_err());
        assert!(parse_cell_list("a,2").is_err());
        assert!(parse_cell_list("1,2,3").is_err());
    }
}
