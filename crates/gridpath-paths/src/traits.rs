use gridpath_core::Coord;

/// Neighbor enumeration for searches.
pub trait Pather {
    /// Append the traversable neighbors of `c` into `buf`, in the order the
    /// search should consider them. The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}
