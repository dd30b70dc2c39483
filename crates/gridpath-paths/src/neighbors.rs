use gridpath_core::{CellGrid, Coord};

use crate::traits::Pather;

/// Push the 4-directional neighbors of `c` into `buf`, in the order up,
/// down, left, right, keeping only those for which `keep` returns `true`.
/// Steps that would overflow the coordinate range are skipped.
pub fn cardinal(c: Coord, keep: impl Fn(Coord) -> bool, buf: &mut Vec<Coord>) {
    for n in c.neighbors_4().into_iter().flatten() {
        if keep(n) {
            buf.push(n);
        }
    }
}

/// [`Pather`] over a [`CellGrid`]: a neighbor is any in-bounds cell that is
/// not a wall. Start and end cells are ordinary traversable cells.
#[derive(Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a CellGrid,
}

impl<'a> GridPather<'a> {
    /// Wrap a grid.
    pub fn new(grid: &'a CellGrid) -> Self {
        Self { grid }
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        cardinal(
            c,
            |n| self.grid.at(n).is_some_and(|k| k.is_passable()),
            buf,
        );
    }
}
