use std::collections::VecDeque;

use gridpath_core::{Bounds, Coord};

/// Result of a single traversal.
///
/// `path` is present only when the goal was reached and runs from the
/// source to the goal inclusive. `visited` lists cells in the order they
/// were removed from the frontier; when the search fails it still holds
/// everything explored before the frontier ran dry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub path: Option<Vec<Coord>>,
    pub visited: Vec<Coord>,
}

impl SearchOutcome {
    /// Whether the goal was reached.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path (0 when no path was found).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}

/// Parent marker for the search source and for undiscovered cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// Search workspace for one grid extent.
///
/// `SearchRange` owns the visited flags, parent links and frontiers, all
/// indexed by the packed key `row * cols + col`. Each search resets them
/// before starting, so queries may be repeated freely and never depend on
/// hash iteration order; discovery order is recorded separately in the
/// outcome's trace.
#[derive(Debug, Clone)]
pub struct SearchRange {
    pub(crate) bounds: Bounds,
    pub(crate) visited: Vec<bool>,
    pub(crate) parent: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) stack: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl SearchRange {
    /// Create a new `SearchRange` for the given extent.
    pub fn new(bounds: Bounds) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            visited: vec![false; len],
            parent: vec![NO_PARENT; len],
            queue: VecDeque::new(),
            stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    // -----------------------------------------------------------------------
    // Shared search plumbing
    // -----------------------------------------------------------------------

    /// Clear caches and seed the visited set with `from`. Returns the packed
    /// key of `from`, or `None` if it lies outside the extent.
    pub(crate) fn begin(&mut self, from: Coord) -> Option<usize> {
        let si = self.idx(from)?;
        self.visited.fill(false);
        self.parent.fill(NO_PARENT);
        self.visited[si] = true;
        Some(si)
    }

    /// Mark `ni` discovered from `ci`. Returns `false` if it was already
    /// discovered.
    #[inline]
    pub(crate) fn discover(&mut self, ni: usize, ci: usize) -> bool {
        if self.visited[ni] {
            return false;
        }
        self.visited[ni] = true;
        self.parent[ni] = ci;
        true
    }

    /// Follow parent links from `goal` back to the source and return the
    /// path in source-to-goal order.
    pub(crate) fn reconstruct(&self, goal: usize) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.coord(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }

    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        self.bounds.index(c)
    }

    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        self.bounds.coord(idx)
    }
}
