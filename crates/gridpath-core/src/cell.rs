//! The [`CellKind`] tag stored in every grid cell.

use std::fmt;

/// State of a single grid cell.
///
/// The discriminants are the integer cell codes used on the wire.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Empty = 0,
    Wall = 1,
    Start = 2,
    End = 3,
}

impl CellKind {
    /// Integer code of the cell (0 Empty, 1 Wall, 2 Start, 3 End).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Single-character form used by the ASCII grid format.
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
        }
    }

    /// Inverse of [`glyph`](CellKind::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellKind::Empty),
            '#' => Some(CellKind::Wall),
            'S' => Some(CellKind::Start),
            'E' => Some(CellKind::End),
            _ => None,
        }
    }
}

impl From<CellKind> for u8 {
    #[inline]
    fn from(k: CellKind) -> Self {
        k.code()
    }
}

/// Returned when an integer does not name a [`CellKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCellCode(pub u8);

impl fmt::Display for InvalidCellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell code {}", self.0)
    }
}

impl std::error::Error for InvalidCellCode {}

impl TryFrom<u8> for CellKind {
    type Error = InvalidCellCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellKind::Empty),
            1 => Ok(CellKind::Wall),
            2 => Ok(CellKind::Start),
            3 => Ok(CellKind::End),
            other => Err(InvalidCellCode(other)),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        CellKind::try_from(code).map_err(serde::de::Error::custom)
    }
}
