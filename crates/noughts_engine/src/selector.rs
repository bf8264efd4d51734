//! Computer opponent: uniform random choice among empty cells.

use crate::source::{MoveSource, SourceKind};
use crate::{Board, Coordinate, NoMovesAvailable, Player, SessionError};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Picks an empty cell uniformly at random.
///
/// # Errors
///
/// Returns [`NoMovesAvailable`] if every cell is occupied.
#[instrument(skip(board, rng))]
pub fn select<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Coordinate, NoMovesAvailable> {
    let empty = board.empty_coordinates();
    let choice = empty.choose(rng).copied().ok_or(NoMovesAvailable)?;
    debug!(candidates = empty.len(), %choice, "Computer chose cell");
    Ok(choice)
}

/// Move source backed by [`select`].
///
/// Owns its random generator so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    /// Creates a random source drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> MoveSource for RandomSource<R> {
    fn next_move(&mut self, board: &Board, _player: Player) -> Result<Coordinate, SessionError> {
        Ok(select(board, &mut self.rng)?)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Random
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_single_empty_cell_always_chosen() {
        let mut board = Board::new();
        let last = Coordinate::new(2, 1);
        for coord in Coordinate::all().filter(|&c| c != last) {
            board.set(coord, Player::X).unwrap();
        }
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(select(&board, &mut rng), Ok(last));
        }
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new();
        for coord in Coordinate::all() {
            board.set(coord, Player::O).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select(&board, &mut rng), Err(NoMovesAvailable));

        let mut computer = RandomSource::new("Computer", rng);
        let err = computer.next_move(&board, Player::X).unwrap_err();
        assert!(matches!(err, SessionError::NoMoves(NoMovesAvailable)));
    }

    #[test]
    fn test_never_selects_occupied_cell() {
        let mut board = Board::new();
        board.set(Coordinate::new(0, 0), Player::X).unwrap();
        board.set(Coordinate::new(1, 1), Player::O).unwrap();
        board.set(Coordinate::new(2, 2), Player::X).unwrap();
        let empty: HashSet<_> = board.empty_coordinates().into_iter().collect();

        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let choice = select(&board, &mut rng).unwrap();
            assert!(empty.contains(&choice), "picked occupied {}", choice);
            seen.insert(choice);
        }
        // Uniform over six cells: 500 draws reach every one.
        assert_eq!(seen, empty);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomSource::new("Computer", StdRng::seed_from_u64(3));
        let mut b = RandomSource::new("Computer", StdRng::seed_from_u64(3));
        for _ in 0..10 {
            assert_eq!(
                a.next_move(&board, Player::O).unwrap(),
                b.next_move(&board, Player::O).unwrap()
            );
        }
        assert_eq!(a.kind(), SourceKind::Random);
        assert_eq!(a.name(), "Computer");
    }
}
