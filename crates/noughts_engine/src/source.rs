//! Move sources and game observers: the controller's collaborators.

use crate::{Board, Coordinate, GameOutcome, InvalidMove, Move, Player, SessionError};

/// How a move source produces its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SourceKind {
    /// A person answering prompts.
    Interactive,
    /// Uniform random choice among empty cells.
    Random,
}

/// Anything that can supply a candidate coordinate for a player's turn.
///
/// The controller validates every coordinate it receives, so a source
/// may return illegal moves; it will simply be asked again.
pub trait MoveSource {
    /// Gets the next candidate coordinate for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Any error ends the session: input failures from interactive
    /// sources, [`crate::NoMovesAvailable`] from the random source.
    fn next_move(&mut self, board: &Board, player: Player) -> Result<Coordinate, SessionError>;

    /// Returns the source's display name.
    fn name(&self) -> &str;

    /// Returns how this source produces moves.
    fn kind(&self) -> SourceKind;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self, board: &Board, player: Player) -> Result<Coordinate, SessionError> {
        (**self).next_move(board, player)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn kind(&self) -> SourceKind {
        (**self).kind()
    }
}

/// Receives game events from the turn controller.
///
/// Every method defaults to doing nothing.
pub trait GameObserver {
    /// `player` is about to be asked for a move by `source`.
    fn turn_started(&mut self, _board: &Board, _player: Player, _source: &dyn MoveSource) {}

    /// A candidate move from `source` was rejected; the source will be asked again.
    fn move_rejected(&mut self, _player: Player, _error: &InvalidMove, _source: &dyn MoveSource) {}

    /// A move was applied to the board.
    fn move_applied(&mut self, _mv: &Move, _board: &Board, _source: &dyn MoveSource) {}

    /// The game reached a terminal outcome.
    fn game_finished(&mut self, _outcome: GameOutcome, _board: &Board) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
