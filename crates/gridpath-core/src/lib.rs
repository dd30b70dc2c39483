//! **gridpath-core**: foundational types for the gridpath workspace.
//!
//! This crate provides the geometry primitives ([`Coord`], [`Bounds`]), the
//! four-valued [`CellKind`] tag and the owned [`CellGrid`] matrix that the
//! search and board crates build on.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{CellKind, InvalidCellCode};
pub use geom::{Bounds, BoundsIter, Coord};
pub use grid::CellGrid;
