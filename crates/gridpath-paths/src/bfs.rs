use gridpath_core::Coord;

use crate::SearchRange;
use crate::searchrange::SearchOutcome;
use crate::traits::Pather;

impl SearchRange {
    /// Breadth-first search from `from` to `to`.
    ///
    /// Cells are discovered (marked visited, parent recorded) when they are
    /// enqueued, so every cell's parent is fixed on first discovery and the
    /// returned path has the minimum number of edges. The trace lists cells
    /// in dequeue order and ends with `to` when the search succeeds.
    ///
    /// Returns an empty outcome if `from` lies outside the range. If `to`
    /// lies outside the range the search explores everything reachable and
    /// fails.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Coord, to: Coord) -> SearchOutcome {
        let Some(si) = self.begin(from) else {
            return SearchOutcome::default();
        };
        let goal = self.idx(to);

        let mut queue = std::mem::take(&mut self.queue);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        queue.clear();
        queue.push_back(si);

        let mut visited = Vec::new();
        let mut found = None;

        while let Some(ci) = queue.pop_front() {
            let cp = self.coord(ci);
            visited.push(cp);

            if Some(ci) == goal {
                found = Some(ci);
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.discover(ni, ci) {
                    queue.push_back(ni);
                }
            }
        }

        self.queue = queue;
        self.nbuf = nbuf;

        SearchOutcome {
            path: found.map(|gi| self.reconstruct(gi)),
            visited,
        }
    }
}
