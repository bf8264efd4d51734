//! Win detection logic.

use crate::{Board, Coordinate, Player};
use tracing::instrument;

/// The eight winning lines, in scan order.
pub const LINES: [[Coordinate; 3]; 8] = [
    // Rows
    [Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(2, 0)],
    [Coordinate::new(0, 1), Coordinate::new(1, 1), Coordinate::new(2, 1)],
    [Coordinate::new(0, 2), Coordinate::new(1, 2), Coordinate::new(2, 2)],
    // Columns
    [Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)],
    [Coordinate::new(1, 0), Coordinate::new(1, 1), Coordinate::new(1, 2)],
    [Coordinate::new(2, 0), Coordinate::new(2, 1), Coordinate::new(2, 2)],
    // Diagonals
    [Coordinate::new(0, 0), Coordinate::new(1, 1), Coordinate::new(2, 2)],
    [Coordinate::new(2, 0), Coordinate::new(1, 1), Coordinate::new(0, 2)],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order,
/// `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.snapshot();

    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|coord| coord.index().map(|i| cells[i]));
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) if a == b && b == c => a.player(),
            _ => None,
        }
    })
}
