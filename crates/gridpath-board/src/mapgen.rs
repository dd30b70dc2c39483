//! Random maze generation.
//!
//! Walls are scattered by an independent Bernoulli trial per cell, so the
//! wall count varies from run to run. The start is then placed in the left
//! quarter of the columns and the end in the right quarter, through the
//! regular marker setters: a wall already sitting on the chosen cell is
//! overwritten by the marker.

use gridpath_core::{Bounds, CellGrid, CellKind, Coord};
use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::state::GridState;

/// Wall probability used when the caller does not pick one.
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Random source for maze generation.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mark each cell of `grid` as a wall with probability `density`,
    /// leaving the others untouched. Returns the number of walls placed.
    ///
    /// A density of 0 or less places nothing and 1 or more walls every
    /// cell; NaN places nothing.
    pub fn scatter_walls(&mut self, grid: &mut CellGrid, density: f64) -> usize {
        let mut placed = 0;
        for c in grid.bounds().iter() {
            let r: f64 = self.rng.random();
            if r < density {
                grid.set(c, CellKind::Wall);
                placed += 1;
            }
        }
        placed
    }

    /// A cell in any row whose column lies in `[0, cols / 4]`.
    pub fn pick_start(&mut self, bounds: Bounds) -> Coord {
        let row = self.rng.random_range(0..bounds.rows);
        let col = self.rng.random_range(0..=bounds.cols / 4);
        Coord::new(row, col)
    }

    /// A cell in any row whose column lies in `[3 * cols / 4, cols - 1]`.
    pub fn pick_end(&mut self, bounds: Bounds) -> Coord {
        let row = self.rng.random_range(0..bounds.rows);
        // 3 * cols / 4 without overflowing i32; the result never exceeds cols
        let lo = (i64::from(bounds.cols) * 3 / 4) as i32;
        let col = self.rng.random_range(lo..=bounds.cols - 1);
        Coord::new(row, col)
    }
}

impl Board {
    /// Reset the board, scatter walls with probability `density` per cell
    /// and place fresh start and end markers. Returns the new snapshot.
    pub fn generate_maze<R: Rng>(&mut self, density: f64, rng: R) -> GridState {
        self.reset();
        let mut mg = MazeGen::new(rng);
        let walls = mg.scatter_walls(&mut self.grid, density);

        let bounds = self.bounds();
        let start = mg.pick_start(bounds);
        self.set_start(start);
        let end = mg.pick_end(bounds);
        self.set_end(end);

        debug!(
            "generated {} maze: density={density} walls={walls} start={start} end={end}",
            bounds
        );
        self.state()
    }
}
