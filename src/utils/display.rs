//! Display and output formatting utilities

use crate::game_of_life::Grid;

/// Formats grids as text
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form, one glyph per cell
    pub fn format_grid_compact(grid: &Grid, live: char, dead: char) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.cols() + 1));
        let last_col = grid.cols() - 1;
        grid.for_each_cell(|_, col, alive| {
            output.push(if alive { live } else { dead });
            if col == last_col {
                output.push('\n');
            }
        });
        output
    }

    /// Format a grid with row and column numbers
    pub fn format_grid_with_coords(grid: &Grid, live: char, dead: char) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        let last_col = grid.cols() - 1;
        grid.for_each_cell(|row, col, alive| {
            if col == 0 {
                output.push_str(&format!("{:2} ", row));
            }
            let glyph = if alive { live } else { dead };
            output.push(glyph);
            output.push(glyph);
            if col == last_col {
                output.push('\n');
            }
        });

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
