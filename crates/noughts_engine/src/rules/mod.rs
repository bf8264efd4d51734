//! Game rules for noughts and crosses.
//!
//! Pure functions that inspect a board and report whether the game is
//! over. They never mutate the board, so the turn controller can call
//! them before the first move and after every move.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, LINES};

use crate::{Board, GameOutcome};
use tracing::instrument;

/// Evaluates the board: a completed line wins, a full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Win(winner)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
