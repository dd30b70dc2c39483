//! Serializable board snapshot.

use gridpath_core::Coord;

/// Full snapshot of a [`Board`](crate::Board).
///
/// `grid` holds `rows` rows of `cols` integer cell codes
/// (0 Empty, 1 Wall, 2 Start, 3 End).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    pub grid: Vec<Vec<u8>>,
    pub rows: i32,
    pub cols: i32,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
}
