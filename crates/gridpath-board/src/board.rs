//! The [`Board`] type and its mutation operations.
//!
//! Mutations never fail loudly: an out-of-range coordinate or an attempt to
//! break a marker invariant returns `false` and leaves the board untouched.

use std::fmt;

use gridpath_core::{Bounds, CellGrid, CellKind, Coord};
use gridpath_paths::{GridPather, Pather, SearchOutcome, SearchRange};
use log::{debug, trace};

use crate::state::GridState;

/// Default number of rows for a freshly started board.
pub const DEFAULT_ROWS: i32 = 15;
/// Default number of columns for a freshly started board.
pub const DEFAULT_COLS: i32 = 25;

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub rows: i32,
    pub cols: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Errors raised when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Both dimensions must be positive.
    InvalidDimensions { rows: i32, cols: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "board dimensions must be positive, got {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// What a client asks to do with a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellAction {
    Start,
    End,
    Wall,
    Clear,
}

impl CellAction {
    /// Parse the wire name (`start`, `end`, `wall`, `clear`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "start" => Some(CellAction::Start),
            "end" => Some(CellAction::End),
            "wall" => Some(CellAction::Wall),
            "clear" => Some(CellAction::Clear),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellAction::Start => "start",
            CellAction::End => "end",
            CellAction::Wall => "wall",
            CellAction::Clear => "clear",
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A pathfinding grid with optional start and end markers.
///
/// `start` and `end` always mirror the matrix: setting a new start demotes
/// the previous start cell to `Empty` before marking the new one, and the
/// same holds for the end. Walls are never placed on the current start or
/// end coordinate.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) grid: CellGrid,
    pub(crate) start: Option<Coord>,
    pub(crate) end: Option<Coord>,
    search: SearchRange,
}

impl Default for Board {
    fn default() -> Self {
        Self::blank(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Board {
    /// Create an empty board. Both dimensions must be positive.
    pub fn new(rows: i32, cols: i32) -> Result<Self, BoardError> {
        if rows <= 0 || cols <= 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self::blank(rows, cols))
    }

    /// Create an empty board from a [`BoardConfig`].
    pub fn with_config(config: &BoardConfig) -> Result<Self, BoardError> {
        Self::new(config.rows, config.cols)
    }

    fn blank(rows: i32, cols: i32) -> Self {
        let grid = CellGrid::new(rows, cols);
        let search = SearchRange::new(grid.bounds());
        Self {
            grid,
            start: None,
            end: None,
            search,
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    /// The current start marker.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// The current end marker.
    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<CellKind> {
        self.grid.at(c)
    }

    /// Read-only view of the matrix.
    #[inline]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Move the start marker to `c`.
    pub fn set_start(&mut self, c: Coord) -> bool {
        if !self.grid.contains(c) {
            trace!("set_start rejected: {c} out of bounds");
            return false;
        }
        if let Some(prev) = self.start.take() {
            self.grid.set(prev, CellKind::Empty);
        }
        self.start = Some(c);
        self.grid.set(c, CellKind::Start)
    }

    /// Move the end marker to `c`.
    pub fn set_end(&mut self, c: Coord) -> bool {
        if !self.grid.contains(c) {
            trace!("set_end rejected: {c} out of bounds");
            return false;
        }
        if let Some(prev) = self.end.take() {
            self.grid.set(prev, CellKind::Empty);
        }
        self.end = Some(c);
        self.grid.set(c, CellKind::End)
    }

    /// Mark `c` as a wall unless it is out of bounds or holds a marker.
    pub fn set_wall(&mut self, c: Coord) -> bool {
        if !self.grid.contains(c) || Some(c) == self.start || Some(c) == self.end {
            trace!("set_wall rejected at {c}");
            return false;
        }
        self.grid.set(c, CellKind::Wall)
    }

    /// Turn a wall at `c` back into an empty cell. Any other cell kind is
    /// left as is and reported as not cleared; markers are only moved by
    /// [`set_start`](Self::set_start) / [`set_end`](Self::set_end).
    pub fn clear_cell(&mut self, c: Coord) -> bool {
        if self.grid.at(c) != Some(CellKind::Wall) {
            trace!("clear_cell ignored at {c}");
            return false;
        }
        self.grid.set(c, CellKind::Empty)
    }

    /// Dispatch a [`CellAction`] to the matching mutation.
    pub fn apply(&mut self, action: CellAction, c: Coord) -> bool {
        match action {
            CellAction::Start => self.set_start(c),
            CellAction::End => self.set_end(c),
            CellAction::Wall => self.set_wall(c),
            CellAction::Clear => self.clear_cell(c),
        }
    }

    /// Clear every cell and remove both markers.
    pub fn reset(&mut self) {
        self.grid.fill(CellKind::Empty);
        self.start = None;
        self.end = None;
    }

    // -----------------------------------------------------------------------
    // Adjacency and search
    // -----------------------------------------------------------------------

    /// Traversable neighbors of `c`, in the order up, down, left, right.
    pub fn neighbors(&self, c: Coord) -> Vec<Coord> {
        let mut buf = Vec::with_capacity(4);
        GridPather::new(&self.grid).neighbors(c, &mut buf);
        buf
    }

    /// Breadth-first search from start to end. Returns an empty outcome if
    /// either marker is missing.
    pub fn bfs(&mut self) -> SearchOutcome {
        let (Some(from), Some(to)) = (self.start, self.end) else {
            return SearchOutcome::default();
        };
        let out = self
            .search
            .bfs_path(&GridPather::new(&self.grid), from, to);
        debug!(
            "bfs {from} -> {to}: found={} explored={}",
            out.found(),
            out.visited.len()
        );
        out
    }

    /// Depth-first search from start to end. Returns an empty outcome if
    /// either marker is missing.
    pub fn dfs(&mut self) -> SearchOutcome {
        let (Some(from), Some(to)) = (self.start, self.end) else {
            return SearchOutcome::default();
        };
        let out = self
            .search
            .dfs_path(&GridPather::new(&self.grid), from, to);
        debug!(
            "dfs {from} -> {to}: found={} explored={}",
            out.found(),
            out.visited.len()
        );
        out
    }

    /// Snapshot of the whole board.
    pub fn state(&self) -> GridState {
        GridState {
            grid: self.grid.codes(),
            rows: self.rows(),
            cols: self.cols(),
            start: self.start,
            end: self.end,
        }
    }
}
