//! Search dispatch by algorithm name.

use std::fmt;
use std::str::FromStr;

use gridpath_core::Coord;
use gridpath_paths::SearchOutcome;

use crate::board::Board;

/// The supported traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    /// Names are matched exactly: `bfs` or `dfs`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(SolveError::InvalidAlgorithm(other.to_owned())),
        }
    }
}

/// A solve request that did not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The requested algorithm name is not `bfs` or `dfs`.
    InvalidAlgorithm(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlgorithm(name) => write!(f, "invalid algorithm {name:?}"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Outcome of a search that ran.
///
/// `success` is false both when no path exists and when the board lacks a
/// start or end marker; in the latter case `visited` is empty too.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport {
    pub success: bool,
    pub path: Vec<Coord>,
    pub visited: Vec<Coord>,
    pub path_length: usize,
    pub nodes_explored: usize,
    pub algorithm: Algorithm,
}

impl SolveReport {
    /// Wrap a raw search outcome.
    pub fn new(algorithm: Algorithm, outcome: SearchOutcome) -> Self {
        let success = outcome.found();
        let path = outcome.path.unwrap_or_default();
        Self {
            success,
            path_length: path.len(),
            nodes_explored: outcome.visited.len(),
            path,
            visited: outcome.visited,
            algorithm,
        }
    }
}

impl Board {
    /// Run `algorithm` between the current markers.
    pub fn run(&mut self, algorithm: Algorithm) -> SolveReport {
        let outcome = match algorithm {
            Algorithm::Bfs => self.bfs(),
            Algorithm::Dfs => self.dfs(),
        };
        SolveReport::new(algorithm, outcome)
    }

    /// Parse `name` and run the matching search. Unknown names are reported
    /// as [`SolveError::InvalidAlgorithm`] without searching.
    pub fn solve(&mut self, name: &str) -> Result<SolveReport, SolveError> {
        let algorithm = name.parse::<Algorithm>()?;
        Ok(self.run(algorithm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn parses_exact_names_only() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("dfs".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!(
            "BFS".parse::<Algorithm>(),
            Err(SolveError::InvalidAlgorithm("BFS".into()))
        );
        assert_eq!(Algorithm::Dfs.to_string(), "dfs");
    }

    #[test]
    fn unknown_algorithm_is_an_error() {
        let mut b = Board::new(3, 3).unwrap();
        b.set_start(c(0, 0));
        b.set_end(c(2, 2));
        let err = b.solve("dijkstra").unwrap_err();
        assert_eq!(err, SolveError::InvalidAlgorithm("dijkstra".into()));
        assert!(err.to_string().contains("dijkstra"));
    }

    #[test]
    fn missing_markers_is_a_normal_failure() {
        let mut b = Board::new(3, 3).unwrap();
        let r = b.solve("bfs").unwrap();
        assert_eq!(
            r,
            SolveReport {
                success: false,
                path: vec![],
                visited: vec![],
                path_length: 0,
                nodes_explored: 0,
                algorithm: Algorithm::Bfs,
            }
        );
    }

    #[test]
    fn counts_match_sequences() {
        let mut b = Board::new(4, 4).unwrap();
        b.set_start(c(0, 0));
        b.set_end(c(3, 3));
        b.set_wall(c(1, 1));
        for name in ["bfs", "dfs"] {
            let r = b.solve(name).unwrap();
            assert!(r.success);
            assert_eq!(r.path_length, r.path.len());
            assert_eq!(r.nodes_explored, r.visited.len());
            assert_eq!(r.algorithm.as_str(), name);
            assert_eq!(r.path.first(), Some(&c(0, 0)));
            assert_eq!(r.path.last(), Some(&c(3, 3)));
        }
    }

    #[test]
    fn bfs_path_is_shortest() {
        let mut b = Board::new(4, 4).unwrap();
        b.set_start(c(0, 0));
        b.set_end(c(3, 3));
        let r = b.run(Algorithm::Bfs);
        assert_eq!(r.path_length, 7);
    }

    #[test]
    fn disconnected_fails_for_both() {
        let mut b = Board::new(3, 3).unwrap();
        b.set_start(c(0, 0));
        b.set_end(c(0, 2));
        for row in 0..3 {
            b.set_wall(c(row, 1));
        }
        for alg in [Algorithm::Bfs, Algorithm::Dfs] {
            let r = b.run(alg);
            assert!(!r.success);
            assert!(r.path.is_empty());
            assert_eq!(r.path_length, 0);
            assert_eq!(r.visited.first(), Some(&c(0, 0)));
            assert_eq!(r.nodes_explored, 3);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_json_shape() {
        let mut b = Board::new(1, 2).unwrap();
        b.set_start(c(0, 0));
        b.set_end(c(0, 1));
        let v = serde_json::to_value(b.run(Algorithm::Bfs)).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "success": true,
                "path": [{"row": 0, "col": 0}, {"row": 0, "col": 1}],
                "visited": [{"row": 0, "col": 0}, {"row": 0, "col": 1}],
                "path_length": 2,
                "nodes_explored": 2,
                "algorithm": "bfs",
            })
        );
    }
}
