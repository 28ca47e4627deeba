//! Simulation loop that owns a grid and paces its generations

use super::render::Renderer;
use crate::config::Settings;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::time::Duration;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Extinct,
    Requested,
}

/// Drives a [`Grid`] through successive generations
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    tick_interval: Duration,
    max_generations: Option<u64>,
    stop_when_extinct: bool,
}

impl Simulation {
    /// Wrap an already seeded grid; no pacing and no limits
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            tick_interval: Duration::ZERO,
            max_generations: None,
            stop_when_extinct: false,
        }
    }

    /// Build the grid described by `settings` and seed its initial pattern
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let sim = &settings.simulation;
        let mut grid = Grid::with_boundary(sim.rows, sim.cols, sim.boundary_condition)
            .context("Failed to create grid")?;
        grid.seed(settings.seed.live_cells.iter().copied())
            .context("Failed to seed initial pattern")?;
        debug!("Seeded {} live cells", grid.living_count());

        Ok(Self::new(grid)
            .with_tick_interval(Duration::from_millis(sim.tick_interval_ms))
            .with_max_generations(sim.max_generations)
            .with_stop_when_extinct(sim.stop_when_extinct))
    }

    /// Pause between generations while running
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Stop once this many generations have been advanced
    pub fn with_max_generations(mut self, max_generations: Option<u64>) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Stop as soon as no cell is alive
    pub fn with_stop_when_extinct(mut self, enabled: bool) -> Self {
        self.stop_when_extinct = enabled;
        self
    }

    /// The grid being simulated
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for callers overriding game state between generations
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Number of generations advanced since seeding
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance exactly one generation
    pub fn tick(&mut self) {
        self.grid.step();
        self.generation += 1;
        trace!("Generation {}: {} living", self.generation, self.grid.living_count());
    }

    fn stop_reason<F>(&self, stop_requested: &mut F) -> Option<StopReason>
    where
        F: FnMut(&Simulation) -> bool,
    {
        if self.max_generations.is_some_and(|max| self.generation >= max) {
            Some(StopReason::GenerationLimit)
        } else if self.stop_when_extinct && self.grid.is_extinct() {
            Some(StopReason::Extinct)
        } else if stop_requested(self) {
            Some(StopReason::Requested)
        } else {
            None
        }
    }

    /// Render the current state, then keep sleeping, stepping and rendering
    /// until a limit is hit or `stop_requested` returns true.
    pub fn run<R, F>(&mut self, renderer: &mut R, mut stop_requested: F) -> Result<StopReason>
    where
        R: Renderer,
        F: FnMut(&Simulation) -> bool,
    {
        info!(
            "Running {}x{} grid ({:?} boundary) from generation {}",
            self.grid.rows(),
            self.grid.cols(),
            self.grid.boundary(),
            self.generation
        );
        renderer.render(&self.grid, self.generation)?;

        loop {
            if let Some(reason) = self.stop_reason(&mut stop_requested) {
                info!("Stopped at generation {}: {:?}", self.generation, reason);
                return Ok(reason);
            }

            if !self.tick_interval.is_zero() {
                std::thread::sleep(self.tick_interval);
            }
            self.tick();
            renderer
                .render(&self.grid, self.generation)
                .with_context(|| format!("Failed to render generation {}", self.generation))?;
        }
    }
}
