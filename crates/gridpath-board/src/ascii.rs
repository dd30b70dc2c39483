//! Text form of a board.
//!
//! One line per row, one character per cell: `.` empty, `#` wall, `S`
//! start, `E` end. Leading and trailing whitespace is trimmed from every
//! line and blank lines are skipped, so boards can be written as indented
//! string literals.

use std::fmt;

use gridpath_core::{CellKind, Coord};

use crate::board::{Board, BoardError};

/// Glyph drawn over empty cells by [`Board::render_path`].
pub const PATH_GLYPH: char = '*';

/// Errors that can occur when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No non-blank lines.
    Empty,
    /// A row is wider or narrower than the first one.
    InconsistentWidth {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A character outside `.#SE`.
    InvalidGlyph { ch: char, at: Coord },
    /// A second `S` or `E`.
    DuplicateMarker { kind: CellKind, at: Coord },
    Board(BoardError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board text is empty"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidGlyph { ch, at } => {
                write!(f, "invalid cell glyph {ch:?} at {at}")
            }
            Self::DuplicateMarker { kind, at } => {
                write!(f, "second {:?} marker at {at}", kind)
            }
            Self::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<BoardError> for ParseError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl Board {
    /// Parse a board from its text form.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(ParseError::Empty);
        };
        let width = first.chars().count();

        let mut board = Board::new(lines.len() as i32, width as i32)?;
        for (row, line) in lines.iter().enumerate() {
            let row = row as i32;
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::InconsistentWidth {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let at = Coord::new(row, col as i32);
                let kind = CellKind::from_glyph(ch).ok_or(ParseError::InvalidGlyph { ch, at })?;
                match kind {
                    CellKind::Empty => {}
                    CellKind::Wall => {
                        board.set_wall(at);
                    }
                    CellKind::Start => {
                        if board.start().is_some() {
                            return Err(ParseError::DuplicateMarker { kind, at });
                        }
                        board.set_start(at);
                    }
                    CellKind::End => {
                        if board.end().is_some() {
                            return Err(ParseError::DuplicateMarker { kind, at });
                        }
                        board.set_end(at);
                    }
                }
            }
        }
        Ok(board)
    }

    /// Text form with `path` drawn as `*` over empty cells.
    pub fn render_path(&self, path: &[Coord]) -> String {
        let mut rows: Vec<Vec<char>> = self
            .grid
            .row_slices()
            .map(|row| row.iter().map(|k| k.glyph()).collect())
            .collect();
        for &c in path {
            if self.grid.at(c) == Some(CellKind::Empty) {
                rows[c.row as usize][c.col as usize] = PATH_GLYPH;
            }
        }
        let mut out = String::with_capacity(self.bounds().len() + self.rows() as usize);
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.row_slices() {
            for k in row {
                write!(f, "{}", k.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
