//! Grid representation and the generation step

use super::cell::Cell;
use super::rules::GameOfLifeRules;
use crate::error::LifeError;
use itertools::iproduct;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How neighbor lookups treat positions past the grid edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCondition {
    /// Positions outside the grid count as dead
    Dead,
    /// Opposite edges are adjacent (torus)
    Wrap,
}

impl From<bool> for BoundaryCondition {
    fn from(wrap: bool) -> Self {
        if wrap {
            BoundaryCondition::Wrap
        } else {
            BoundaryCondition::Dead
        }
    }
}

/// Represents a Game of Life grid
///
/// Dimensions and boundary policy are fixed at construction. Cells are
/// stored row-major and addressed by `(row, col)`.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    boundary: BoundaryCondition,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid, wrapping at the edges when `wrap` is set
    pub fn new(rows: usize, cols: usize, wrap: bool) -> Result<Self, LifeError> {
        Self::with_boundary(rows, cols, wrap.into())
    }

    /// Create an all-dead grid with an explicit boundary condition
    pub fn with_boundary(
        rows: usize,
        cols: usize,
        boundary: BoundaryCondition,
    ) -> Result<Self, LifeError> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len > 0 && len <= isize::MAX as usize / std::mem::size_of::<Cell>())
            .ok_or(LifeError::InvalidDimension { rows, cols })?;

        debug!("Creating {}x{} grid with {:?} boundary", rows, cols, boundary);
        Ok(Self {
            rows,
            cols,
            boundary,
            cells: vec![Cell::default(); len],
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Boundary condition used when counting neighbors
    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    /// True when opposite edges are adjacent
    pub fn wraps(&self) -> bool {
        self.boundary == BoundaryCondition::Wrap
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: isize, col: isize) -> Result<usize, LifeError> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return Err(LifeError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index(row as usize, col as usize))
    }

    /// Get the current state of the cell at `(row, col)`
    pub fn is_alive(&self, row: isize, col: isize) -> Result<bool, LifeError> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx].is_alive())
    }

    /// Set the current state of the cell at `(row, col)`
    pub fn set_alive(&mut self, row: isize, col: isize, value: bool) -> Result<(), LifeError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx].set_alive(value);
        Ok(())
    }

    /// Bring every listed cell to life, stopping at the first bad coordinate
    pub fn seed<I>(&mut self, cells: I) -> Result<(), LifeError>
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        for (row, col) in cells {
            self.set_alive(row, col, true)?;
        }
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_alive(false);
        }
    }

    /// Live neighbor count the next step would use for `(row, col)`
    pub fn live_neighbors(&self, row: isize, col: isize) -> Result<u8, LifeError> {
        self.checked_index(row, col)?;
        Ok(self.count_neighbors(row as usize, col as usize))
    }

    fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dr, dc)| self.is_neighbor_alive(row as isize + dr, col as isize + dc))
            .count() as u8
    }

    /// Check if a neighbor at given coordinates is alive, handling boundary conditions
    fn is_neighbor_alive(&self, row: isize, col: isize) -> bool {
        match self.boundary {
            BoundaryCondition::Dead => {
                if row >= 0 && row < self.rows as isize && col >= 0 && col < self.cols as isize {
                    self.cells[self.index(row as usize, col as usize)].is_alive()
                } else {
                    false
                }
            }
            BoundaryCondition::Wrap => {
                let wrapped_row = row.rem_euclid(self.rows as isize) as usize;
                let wrapped_col = col.rem_euclid(self.cols as isize) as usize;
                self.cells[self.index(wrapped_row, wrapped_col)].is_alive()
            }
        }
    }

    /// Advance the grid by one generation.
    ///
    /// Every cell is staged from the current state before any cell is
    /// committed, so no neighbor count observes a partially advanced grid.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                let neighbors = self.count_neighbors(row, col);
                let next = GameOfLifeRules::should_be_alive(self.cells[idx].is_alive(), neighbors);
                self.cells[idx].stage_next(next);
            }
        }

        for cell in &mut self.cells {
            cell.commit();
        }

        trace!("Step complete, {} living cells", self.living_count());
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(row, col)| self.cells[self.index(row, col)].is_alive())
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Visit every cell in row-major order as `(row, col, alive)`
    pub fn for_each_cell<F: FnMut(usize, usize, bool)>(&self, mut f: F) {
        for (idx, cell) in self.cells.iter().enumerate() {
            f(idx / self.cols, idx % self.cols, cell.is_alive());
        }
    }
}

/// Grids are equal when shape, boundary and every live cell match
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.boundary == other.boundary
            && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", if cell.is_alive() { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
