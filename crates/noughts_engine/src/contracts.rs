//! Move validation.
//!
//! A move is legal when its coordinate lies on the board and the cell
//! there is empty. Each condition is its own check so the checks can be
//! composed and tested independently.

use crate::{Board, Coordinate, InvalidMove};
use tracing::{debug, instrument};

/// Precondition: the coordinate lies within the 3x3 grid.
pub struct InBounds;

impl InBounds {
    /// Fails with [`InvalidMove::OutOfRange`] if either axis is off the board.
    #[instrument]
    pub fn check(coord: Coordinate) -> Result<(), InvalidMove> {
        if coord.in_bounds() {
            Ok(())
        } else {
            Err(InvalidMove::OutOfRange(coord))
        }
    }
}

/// Precondition: the cell at the coordinate is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`InvalidMove::CellOccupied`] if the cell holds a mark.
    #[instrument(skip(board))]
    pub fn check(board: &Board, coord: Coordinate) -> Result<(), InvalidMove> {
        if board.get(coord)?.is_empty() {
            Ok(())
        } else {
            Err(InvalidMove::CellOccupied(coord))
        }
    }
}

/// Composite precondition: in bounds, then empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(board: &Board, coord: Coordinate) -> Result<(), InvalidMove> {
        InBounds::check(coord)?;
        CellIsEmpty::check(board, coord)?;
        Ok(())
    }
}

/// Decides whether `coord` may be played on `board`.
///
/// # Errors
///
/// [`InvalidMove::OutOfRange`] if the coordinate is off the board,
/// [`InvalidMove::CellOccupied`] if the cell already holds a mark.
#[instrument(skip(board))]
pub fn validate(board: &Board, coord: Coordinate) -> Result<(), InvalidMove> {
    LegalMove::check(board, coord).inspect_err(|err| debug!(%err, "Move failed validation"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_cell_is_legal() {
        let board = Board::new();
        for coord in Coordinate::all() {
            assert_eq!(validate(&board, coord), Ok(()));
        }
    }

    #[test]
    fn test_off_board_coordinates_rejected() {
        let board = Board::new();
        for (column, row) in [(3, 0), (0, 3), (3, 3), (7, 1), (usize::MAX, 0)] {
            let coord = Coordinate::new(column, row);
            assert_eq!(validate(&board, coord), Err(InvalidMove::OutOfRange(coord)));
        }
    }

    #[test]
    fn test_occupied_cells_rejected() {
        let mut board = Board::new();
        for (coord, player) in Coordinate::all().zip([Player::X, Player::O].into_iter().cycle()) {
            board.set(coord, player).unwrap();
            assert_eq!(validate(&board, coord), Err(InvalidMove::CellOccupied(coord)));
        }
    }

    #[test]
    fn test_bounds_checked_before_occupancy() {
        let mut board = Board::new();
        board.set(Coordinate::new(0, 0), Player::X).unwrap();
        assert_eq!(
            LegalMove::check(&board, Coordinate::new(3, 0)),
            Err(InvalidMove::OutOfRange(Coordinate::new(3, 0)))
        );
        assert_eq!(InBounds::check(Coordinate::new(2, 2)), Ok(()));
    }
}
