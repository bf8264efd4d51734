//! Board addressing: columns A-C, rows 1-3.

use crate::error::ParseCoordinateError;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of cells along each side of the board.
pub const SIDE: usize = 3;

/// A `(column, row)` pair addressing one cell.
///
/// Both axes are zero-based. Values outside `0..3` are representable
/// so that validation can reject them; use [`Coordinate::index`] to
/// find out whether a coordinate lies on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Zero-based column, `A` is 0.
    pub column: usize,
    /// Zero-based row, `1` is 0.
    pub row: usize,
}

impl Coordinate {
    /// Creates a coordinate without checking bounds.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Creates a coordinate from its column letter and row digit.
    pub fn from_parts(column: Column, row: Row) -> Self {
        Self::new(column.index(), row.index())
    }

    /// Row-major board index (0-8), or `None` if off the board.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then(|| self.row * SIDE + self.column)
    }

    /// Creates the coordinate for a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIDE * SIDE).then(|| Self::new(index % SIDE, index / SIDE))
    }

    /// Returns true if both axes are within `0..3`.
    pub fn in_bounds(self) -> bool {
        self.column < SIDE && self.row < SIDE
    }

    /// All nine on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..SIDE * SIDE).filter_map(Self::from_index)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (Column::from_index(self.column), Row::from_index(self.row)) {
            (Some(column), Some(row)) => write!(f, "{}{}", column, row),
            _ => write!(f, "({}, {})", self.column, self.row),
        }
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses `B3`-style text: one letter A-C (any case) then one digit 1-3.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseCoordinateError {
            input: trimmed.to_string(),
        };

        let mut chars = trimmed.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };

        let column = Column::from_label(&letter.to_string()).ok_or_else(err)?;
        let row = Row::from_label(&digit.to_string()).ok_or_else(err)?;
        Ok(Self::from_parts(column, row))
    }
}

/// Column letter shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Column {
    /// Left column.
    A,
    /// Middle column.
    B,
    /// Right column.
    C,
}

impl Column {
    /// Zero-based column index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column for a zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Parses a column letter, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|column| column.to_string().eq_ignore_ascii_case(label.trim()))
    }
}

/// Row number shown beside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Row {
    /// Top row.
    #[strum(to_string = "1")]
    One,
    /// Middle row.
    #[strum(to_string = "2")]
    Two,
    /// Bottom row.
    #[strum(to_string = "3")]
    Three,
}

impl Row {
    /// Zero-based row index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row for a zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Parses a row digit.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|row| row.to_string() == label.trim())
    }
}
