//! Error types for the game engine.

use crate::Coordinate;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// A proposed move the board cannot accept.
///
/// Recoverable: the turn controller reports it and asks the same
/// move source again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Column or row lies outside the 3x3 grid.
    #[display("Coordinate {} is off the board", _0)]
    OutOfRange(#[error(not(source))] Coordinate),

    /// Cell already holds a mark.
    #[display("Cell {} is already taken", _0)]
    CellOccupied(#[error(not(source))] Coordinate),
}

impl InvalidMove {
    /// Returns the coordinate that was rejected.
    pub fn coordinate(&self) -> Coordinate {
        match self {
            InvalidMove::OutOfRange(coord) | InvalidMove::CellOccupied(coord) => *coord,
        }
    }
}

/// Text that does not name a cell, e.g. `D4` or `hello`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("'{}' is not a coordinate: expected a letter A-C followed by a digit 1-3", input)]
pub struct ParseCoordinateError {
    /// The rejected input, trimmed.
    pub input: String,
}

/// A move source could not produce a move (EOF, I/O failure, player quit).
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputSourceFailure {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputSourceFailure {
    /// Creates a new input failure with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputSourceFailure {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// The computer was asked to move on a board with no empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No moves available: every cell is occupied")]
pub struct NoMovesAvailable;

/// Fatal error that ends a game session.
///
/// Each variant prints its inner error, so none reports it as a source.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// The move source gave up.
    #[display("{}", _0)]
    Input(#[error(not(source))] InputSourceFailure),

    /// The computer had nothing to choose from.
    #[display("{}", _0)]
    NoMoves(#[error(not(source))] NoMovesAvailable),

    /// A validated move was refused by the board.
    #[display("Board rejected a validated move: {}", _0)]
    Board(#[error(not(source))] InvalidMove),
}
