//! The pathfinding board: a grid with start, end and wall cells.
//!
//! [`Board`] enforces the marker invariants (at most one start, at most one
//! end, walls never on a marker), generates random mazes, and runs
//! breadth-first or depth-first search between the markers. Results are
//! returned as plain records ([`GridState`], [`SolveReport`]) ready to be
//! serialized by a front end.

pub mod ascii;
pub mod board;
pub mod mapgen;
pub mod solve;
pub mod state;

pub use ascii::ParseError;
pub use board::{Board, BoardConfig, BoardError, CellAction, DEFAULT_COLS, DEFAULT_ROWS};
pub use gridpath_core::{CellKind, Coord};
pub use mapgen::{DEFAULT_DENSITY, MazeGen};
pub use solve::{Algorithm, SolveError, SolveReport};
pub use state::GridState;
