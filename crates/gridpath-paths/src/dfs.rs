use gridpath_core::Coord;

use crate::SearchRange;
use crate::searchrange::SearchOutcome;
use crate::traits::Pather;

impl SearchRange {
    /// Depth-first search from `from` to `to`.
    ///
    /// Same discipline as [`bfs_path`](Self::bfs_path) with a LIFO frontier:
    /// cells are marked visited and given a parent when pushed, and appended
    /// to the trace when popped. Neighbors are pushed in pather order, so the
    /// last one pushed (right, for a [`GridPather`](crate::GridPather)) is
    /// explored first. The path is valid but not necessarily shortest.
    pub fn dfs_path<P: Pather>(&mut self, pather: &P, from: Coord, to: Coord) -> SearchOutcome {
        let Some(si) = self.begin(from) else {
            return SearchOutcome::default();
        };
        let goal = self.idx(to);

        let mut stack = std::mem::take(&mut self.stack);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        stack.clear();
        stack.push(si);

        let mut visited = Vec::new();
        let mut found = None;

        while let Some(ci) = stack.pop() {
            let cp = self.coord(ci);
            visited.push(cp);

            if Some(ci) == goal {
                found = Some(ci);
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for i in 0..nbuf.len() {
                let Some(ni) = self.idx(nbuf[i]) else {
                    continue;
                };
                if self.discover(ni, ci) {
                    stack.push(ni);
                }
            }
        }

        self.stack = stack;
        self.nbuf = nbuf;

        SearchOutcome {
            path: found.map(|gi| self.reconstruct(gi)),
            visited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridPather;
    use gridpath_core::{CellGrid, CellKind};

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn last_pushed_neighbor_is_explored_first() {
        let mut g = CellGrid::new(3, 3);
        g.set(c(0, 1), CellKind::Wall);
        let mut sr = SearchRange::new(g.bounds());
        let out = sr.dfs_path(&GridPather::new(&g), c(0, 0), c(2, 2));
        assert_eq!(
            out.path,
            Some(vec![c(0, 0), c(1, 0), c(1, 1), c(1, 2), c(2, 2)])
        );
        assert_eq!(out.visited, vec![c(0, 0), c(1, 0), c(1, 1), c(1, 2), c(2, 2)]);
    }

    #[test]
    fn path_need_not_be_shortest() {
        let g = CellGrid::new(3, 3);
        let mut sr = SearchRange::new(g.bounds());
        let out = sr.dfs_path(&GridPather::new(&g), c(0, 0), c(2, 0));
        assert_eq!(
            out.path,
            Some(vec![c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(2, 2), c(2, 1), c(2, 0)])
        );
    }

    #[test]
    fn goal_discovered_early_is_popped_late() {
        // The goal is pushed first but explored last; its parent stays the
        // cell that discovered it.
        let g = CellGrid::new(3, 3);
        let mut sr = SearchRange::new(g.bounds());
        let out = sr.dfs_path(&GridPather::new(&g), c(0, 0), c(1, 0));
        assert_eq!(out.path, Some(vec![c(0, 0), c(1, 0)]));
        assert_eq!(
            out.visited,
            vec![
                c(0, 0),
                c(0, 1),
                c(0, 2),
                c(1, 2),
                c(2, 2),
                c(2, 1),
                c(2, 0),
                c(1, 1),
                c(1, 0),
            ]
        );
    }

    #[test]
    fn disconnected_goal_fails_with_trace() {
        let mut g = CellGrid::new(3, 3);
        for row in 0..3 {
            g.set(c(row, 1), CellKind::Wall);
        }
        let mut sr = SearchRange::new(g.bounds());
        let out = sr.dfs_path(&GridPather::new(&g), c(0, 0), c(0, 2));
        assert!(!out.found());
        assert_eq!(out.visited.len(), 3);
        assert_eq!(out.visited[0], c(0, 0));
    }

    #[test]
    fn visits_each_cell_at_most_once() {
        let g = CellGrid::new(4, 4);
        let mut sr = SearchRange::new(g.bounds());
        let out = sr.dfs_path(&GridPather::new(&g), c(0, 0), c(9, 9));
        let mut seen = out.visited.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), out.visited.len());
        assert_eq!(out.visited.len(), 16);
    }
}
