//! The [`CellGrid`] type: an owned rows×cols matrix of [`CellKind`].
//!
//! Storage is a single row-major `Vec` addressed by the packed key from
//! [`Bounds::index`]. The grid is a plain value: cloning it copies the cells,
//! and mutation goes through `&mut self`, so a single owner can hand it to
//! other threads behind whatever lock it chooses.

use crate::cell::CellKind;
use crate::geom::{Bounds, Coord};

/// A rectangular matrix of [`CellKind`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<CellKind>,
    bounds: Bounds,
}

impl CellGrid {
    /// Create a grid of the given dimensions with every cell `Empty`.
    /// Negative dimensions produce an empty grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![CellKind::Empty; bounds.len()],
            bounds,
        }
    }

    /// The extent of this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// Get the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellKind> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Set the cell at `c`. Returns `false` (and does nothing) if `c` is out
    /// of bounds.
    #[inline]
    pub fn set(&mut self, c: Coord, kind: CellKind) -> bool {
        match self.bounds.index(c) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `kind`.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
    }

    /// Count how many cells equal `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// One slice per row, in row order.
    pub fn row_slices(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.chunks(self.bounds.cols.max(1) as usize)
    }

    /// Snapshot of the matrix as `rows` vectors of `cols` integer codes.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.row_slices()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}
