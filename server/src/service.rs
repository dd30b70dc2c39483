//! The shared board and the operations the routes call.

use std::sync::Arc;

use gridpath_board::{
    Board, BoardError, CellAction, Coord, GridState, SolveError, SolveReport,
};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Result of a `setCell` request: whether the board changed and the
/// snapshot taken right after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellUpdate {
    pub updated: bool,
    pub state: GridState,
}

struct Shared {
    board: Board,
    rng: StdRng,
}

/// Handle to the one board the server owns.
///
/// Cloning the handle shares the board. Every operation holds the lock from
/// its first read to its final snapshot.
#[derive(Clone)]
pub struct GridService {
    inner: Arc<Mutex<Shared>>,
}

impl GridService {
    pub fn new(board: Board, rng: StdRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Shared { board, rng })),
        }
    }

    /// Build the service described by `config`.
    pub fn from_config(config: &ServerConfig) -> Result<Self, BoardError> {
        let board = Board::with_config(&config.board)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::new(board, rng))
    }

    pub async fn state(&self) -> GridState {
        self.inner.lock().await.board.state()
    }

    /// Apply the action named `kind` at `(row, col)`. Unknown kinds,
    /// coordinates outside the `i32` range and rejected mutations leave the
    /// board unchanged and report `updated: false`.
    pub async fn set_cell(&self, row: i64, col: i64, kind: &str) -> CellUpdate {
        let mut shared = self.inner.lock().await;
        let updated = match (CellAction::parse(kind), i32::try_from(row), i32::try_from(col)) {
            (Some(action), Ok(row), Ok(col)) => shared.board.apply(action, Coord::new(row, col)),
            (None, _, _) => {
                debug!("ignoring unknown cell kind {kind:?}");
                false
            }
            _ => {
                debug!("ignoring out-of-range cell ({row}, {col})");
                false
            }
        };
        CellUpdate {
            updated,
            state: shared.board.state(),
        }
    }

    pub async fn solve(&self, algorithm: &str) -> Result<SolveReport, SolveError> {
        self.inner.lock().await.board.solve(algorithm)
    }

    pub async fn reset(&self) -> GridState {
        let mut shared = self.inner.lock().await;
        shared.board.reset();
        shared.board.state()
    }

    pub async fn generate(&self, density: f64) -> GridState {
        let mut shared = self.inner.lock().await;
        let Shared { board, rng } = &mut *shared;
        board.generate_maze(density, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use gridpath_board::{Algorithm, CellKind};

    fn service(rows: i32, cols: i32) -> GridService {
        GridService::new(Board::new(rows, cols).unwrap(), StdRng::seed_from_u64(11))
    }

    #[tokio::test]
    async fn state_is_idempotent() {
        let svc = service(4, 5);
        svc.set_cell(1, 1, "wall").await;
        assert_eq!(svc.state().await, svc.state().await);
    }

    #[tokio::test]
    async fn set_cell_reports_updates() {
        let svc = service(3, 3);
        let up = svc.set_cell(0, 0, "start").await;
        assert!(up.updated);
        assert_eq!(up.state.start, Some(Coord::new(0, 0)));
        assert_eq!(up.state.grid[0][0], CellKind::Start.code());

        let up = svc.set_cell(0, 0, "wall").await;
        assert!(!up.updated);
        assert_eq!(up.state.grid[0][0], 2);

        let up = svc.set_cell(7, 7, "end").await;
        assert!(!up.updated);
        assert_eq!(up.state.end, None);

        let up = svc.set_cell(1, 1, "teleporter").await;
        assert!(!up.updated);

        let before = svc.state().await;
        let up = svc.set_cell(1 << 32, 0, "wall").await;
        assert!(!up.updated);
        let up = svc.set_cell(0, i64::MIN, "start").await;
        assert!(!up.updated);
        assert_eq!(up.state, before);
    }

    #[tokio::test]
    async fn solve_runs_against_shared_board() {
        let svc = service(3, 3);
        svc.set_cell(0, 0, "start").await;
        svc.set_cell(2, 2, "end").await;
        let r = svc.solve("bfs").await.unwrap();
        assert!(r.success);
        assert_eq!(r.algorithm, Algorithm::Bfs);
        assert_eq!(r.path_length, 5);
        assert!(matches!(
            svc.solve("astar").await,
            Err(SolveError::InvalidAlgorithm(_))
        ));
    }

    #[tokio::test]
    async fn reset_and_generate() {
        let svc = service(15, 25);
        let g = svc.generate(0.3).await;
        assert!(g.start.is_some() && g.end.is_some());
        let r = svc.reset().await;
        assert_eq!(r.start, None);
        assert!(r.grid.iter().flatten().all(|&code| code == 0));
    }

    #[tokio::test]
    async fn seeded_services_generate_identical_mazes() {
        let cfg = ServerConfig {
            seed: Some(99),
            ..ServerConfig::default()
        };
        let a = GridService::from_config(&cfg).unwrap();
        let b = GridService::from_config(&cfg).unwrap();
        assert_eq!(a.generate(0.3).await, b.generate(0.3).await);
    }

    #[tokio::test]
    async fn clones_share_one_board() {
        let svc = service(3, 3);
        let other = svc.clone();
        other.set_cell(1, 2, "wall").await;
        assert_eq!(svc.state().await.grid[1][2], 1);
    }

    fn assert_consistent(r: &SolveReport) {
        assert_eq!(r.path_length, r.path.len());
        assert_eq!(r.nodes_explored, r.visited.len());
        assert_eq!(r.success, !r.path.is_empty());
        let unique: BTreeSet<_> = r.visited.iter().collect();
        assert_eq!(unique.len(), r.visited.len(), "revisited cell in {:?}", r.visited);
        if r.success {
            assert_eq!(r.path.first(), r.visited.first());
            for w in r.path.windows(2) {
                assert_eq!(w[0].manhattan(w[1]), 1, "broken path {:?}", r.path);
            }
            for c in &r.path {
                assert!(unique.contains(c));
            }
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_edits_and_solves_stay_consistent() {
        let svc = service(6, 6);
        svc.set_cell(0, 0, "start").await;
        svc.set_cell(5, 5, "end").await;

        let mut tasks = Vec::new();
        for w in 0..4i64 {
            let svc = svc.clone();
            tasks.push(tokio::spawn(async move {
                for i in 0..60i64 {
                    let (row, col) = ((i + w) % 6, (i * 7 + w) % 6);
                    let kind = ["wall", "clear", "wall", "start", "end"][((i + w) % 5) as usize];
                    svc.set_cell(row, col, kind).await;
                }
                Vec::<SolveReport>::new()
            }));
        }
        for _ in 0..4 {
            let svc = svc.clone();
            tasks.push(tokio::spawn(async move {
                let mut reports = Vec::new();
                for i in 0..60 {
                    let alg = if i % 2 == 0 { "bfs" } else { "dfs" };
                    reports.push(svc.solve(alg).await.unwrap());
                }
                reports
            }));
        }

        for task in tasks {
            for r in task.await.unwrap() {
                assert_consistent(&r);
            }
        }
        let state = svc.state().await;
        let count = |code: u8| state.grid.iter().flatten().filter(|&&c| c == code).count();
        assert!(count(2) <= 1);
        assert!(count(3) <= 1);
    }
}
