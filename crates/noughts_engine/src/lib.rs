//! Noughts and crosses game engine.
//!
//! Pure game logic with no terminal I/O: the board, move validation,
//! win and draw detection, the random computer opponent, and the turn
//! controller that sequences a game between two [`MoveSource`]s.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{NullObserver, RandomSource, TurnController};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let x = RandomSource::new("Computer X", StdRng::seed_from_u64(1));
//! let o = RandomSource::new("Computer O", StdRng::seed_from_u64(2));
//! let mut game = TurnController::new(x, o);
//! let outcome = game.run(&mut NullObserver).unwrap();
//! assert!(outcome.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod controller;
mod coordinate;
mod error;
mod outcome;
pub mod rules;
mod selector;
mod source;
mod types;

pub use action::Move;
pub use board::{Board, CELLS};
pub use contracts::{validate, CellIsEmpty, InBounds, LegalMove};
pub use controller::{TurnController, TurnState};
pub use coordinate::{Column, Coordinate, Row, SIDE};
pub use error::{InputSourceFailure, InvalidMove, NoMovesAvailable, ParseCoordinateError, SessionError};
pub use outcome::GameOutcome;
pub use rules::evaluate;
pub use selector::{select, RandomSource};
pub use source::{GameObserver, MoveSource, NullObserver, SourceKind};
pub use types::{Cell, Player};
