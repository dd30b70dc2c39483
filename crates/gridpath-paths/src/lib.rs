//! Unweighted graph search on 4-connected grids.
//!
//! This crate provides the two traversals used by gridpath:
//!
//! - **Breadth-first search** ([`SearchRange::bfs_path`]): FIFO frontier,
//!   shortest path in edge count.
//! - **Depth-first search** ([`SearchRange::dfs_path`]): LIFO frontier,
//!   some valid path.
//!
//! Both return a [`SearchOutcome`] holding the reconstructed path (if the
//! goal was reached) and the visitation trace in the exact order cells left
//! the frontier. All searches run through [`SearchRange`], which owns and
//! reuses its visited/parent caches so repeated queries do not reallocate.
//!
//! Adjacency is supplied through the [`Pather`] trait; [`GridPather`]
//! implements it for a [`CellGrid`](gridpath_core::CellGrid).

mod bfs;
mod dfs;
mod neighbors;
mod searchrange;
mod traits;

pub use neighbors::{GridPather, cardinal};
pub use searchrange::{SearchOutcome, SearchRange};
pub use traits::Pather;
