//! Presentation adapters driven by the simulation loop

use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use crate::utils::GridFormatter;
use anyhow::{Context, Result};
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Receives the grid after seeding and after every generation
pub trait Renderer {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()>;
}

/// Writes each generation as text to any [`Write`] sink
pub struct TextRenderer<W: Write> {
    out: W,
    display: DisplayConfig,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        Self { out, display }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
        let DisplayConfig {
            live_glyph,
            dead_glyph,
            clear_screen,
            show_coordinates,
        } = self.display;

        let body = if show_coordinates {
            GridFormatter::format_grid_with_coords(grid, live_glyph, dead_glyph)
        } else {
            GridFormatter::format_grid_compact(grid, live_glyph, dead_glyph)
        };

        if clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        writeln!(
            self.out,
            "Generation {} (living: {})",
            generation,
            grid.living_count()
        )?;
        self.out.write_all(body.as_bytes())?;
        self.out.flush().context("Failed to flush renderer output")
    }
}
