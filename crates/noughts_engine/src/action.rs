//! Accepted moves.

use crate::{Coordinate, Player};
use tracing::instrument;

/// A player placing their mark on a cell.
///
/// Only moves that passed validation are recorded as `Move`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell the player marked.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coordinate: Coordinate) -> Self {
        Self { player, coordinate }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.player, self.coordinate)
    }
}
