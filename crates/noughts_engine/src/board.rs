//! The 3x3 board.

use crate::coordinate::SIDE;
use crate::error::InvalidMove;
use crate::types::{Cell, Player};
use crate::Coordinate;
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// 3x3 noughts-and-crosses board.
///
/// The board enforces coordinate bounds only. Whether a cell may be
/// played is decided by [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from three rows of cells, top row first.
    pub fn from_rows(rows: [[Cell; SIDE]; SIDE]) -> Self {
        let mut cells = [Cell::Empty; CELLS];
        for (row_index, row) in rows.iter().enumerate() {
            cells[row_index * SIDE..(row_index + 1) * SIDE].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Gets the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] if `coord` is off the board.
    pub fn get(&self, coord: Coordinate) -> Result<Cell, InvalidMove> {
        let index = coord.index().ok_or(InvalidMove::OutOfRange(coord))?;
        Ok(self.cells[index])
    }

    /// Puts `player`'s mark on `coord`, whatever the cell held before.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] if `coord` is off the board.
    #[instrument(skip(self))]
    pub fn set(&mut self, coord: Coordinate, player: Player) -> Result<(), InvalidMove> {
        let index = coord.index().ok_or(InvalidMove::OutOfRange(coord))?;
        self.cells[index] = Cell::Occupied(player);
        trace!(index, "Cell marked");
        Ok(())
    }

    /// Row-major copy of all nine cells, for display.
    pub fn snapshot(&self) -> [Cell; CELLS] {
        self.cells
    }

    /// Iterates over the three rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIDE)
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_coordinates(&self) -> Vec<Coordinate> {
        Coordinate::all()
            .zip(self.cells.iter())
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}
