//! Turn sequencing for a single game.
//!
//! The controller owns the board and one move source per player. Each
//! step evaluates the board, and if the game is still open asks the
//! active player's source for a move until it offers a legal one.

use crate::contracts::validate;
use crate::rules::evaluate;
use crate::source::{GameObserver, MoveSource};
use crate::{Board, GameOutcome, Move, Player, SessionError};
use tracing::{debug, info, instrument, warn};

/// Where the controller is in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Waiting for this player to move.
    AwaitingMove(Player),
    /// Terminal: this player completed a line.
    Won(Player),
    /// Terminal: full board, no line.
    Draw,
}

impl TurnState {
    /// The final outcome, or `None` while moves are still awaited.
    pub fn final_outcome(&self) -> Option<GameOutcome> {
        match self {
            TurnState::AwaitingMove(_) => None,
            TurnState::Won(player) => Some(GameOutcome::Win(*player)),
            TurnState::Draw => Some(GameOutcome::Draw),
        }
    }
}

/// Drives a game from the first move to a win or draw.
///
/// Move sources are seated at construction; the controller never needs
/// to know whether a seat is a person or the computer.
pub struct TurnController<'a> {
    board: Board,
    state: TurnState,
    x: Box<dyn MoveSource + 'a>,
    o: Box<dyn MoveSource + 'a>,
    history: Vec<Move>,
}

impl<'a> TurnController<'a> {
    /// Creates a controller for a fresh game: empty board, X to move.
    #[instrument(skip_all, fields(x = x.name(), o = o.name()))]
    pub fn new(x: impl MoveSource + 'a, o: impl MoveSource + 'a) -> Self {
        Self::with_board(Board::new(), Player::X, x, o)
    }

    /// Creates a controller that resumes from `board` with `to_move` next.
    ///
    /// The board is evaluated before anyone is asked to move, so a
    /// board that is already won or full finishes on the first step.
    pub fn with_board(
        board: Board,
        to_move: Player,
        x: impl MoveSource + 'a,
        o: impl MoveSource + 'a,
    ) -> Self {
        Self {
            board,
            state: TurnState::AwaitingMove(to_move),
            x: Box::new(x),
            o: Box::new(o),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Moves accepted so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Performs one transition and returns the new state.
    ///
    /// From `AwaitingMove(p)` this either ends the game or applies
    /// exactly one legal move for `p`. Rejected candidates are reported
    /// to `observer` and the same source is asked again. Terminal states
    /// are returned unchanged.
    ///
    /// # Errors
    ///
    /// Propagates any error from the active move source.
    #[instrument(skip_all, fields(state = ?self.state))]
    pub fn step(&mut self, observer: &mut dyn GameObserver) -> Result<TurnState, SessionError> {
        let TurnState::AwaitingMove(player) = self.state else {
            return Ok(self.state);
        };

        match evaluate(&self.board) {
            GameOutcome::Win(winner) => return Ok(self.finish(TurnState::Won(winner), observer)),
            GameOutcome::Draw => return Ok(self.finish(TurnState::Draw, observer)),
            GameOutcome::InProgress => {}
        }

        let source: &mut (dyn MoveSource + 'a) = match player {
            Player::X => self.x.as_mut(),
            Player::O => self.o.as_mut(),
        };
        observer.turn_started(&self.board, player, &*source);

        let coordinate = loop {
            let candidate = source.next_move(&self.board, player)?;
            match validate(&self.board, candidate) {
                Ok(()) => break candidate,
                Err(err) => {
                    warn!(%player, %err, source = source.name(), "Move rejected, asking again");
                    observer.move_rejected(player, &err, &*source);
                }
            }
        };

        self.board.set(coordinate, player)?;
        let mv = Move::new(player, coordinate);
        self.history.push(mv);
        debug!(%mv, source = source.name(), "Move applied");
        observer.move_applied(&mv, &self.board, &*source);

        self.state = TurnState::AwaitingMove(player.opponent());
        Ok(self.state)
    }

    /// Steps until the game is won or drawn.
    ///
    /// # Errors
    ///
    /// Propagates the first error from a move source; the board keeps
    /// every move applied before it.
    #[instrument(skip_all)]
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> Result<GameOutcome, SessionError> {
        info!(x = self.x.name(), o = self.o.name(), "Game started");
        loop {
            if let Some(outcome) = self.step(observer)?.final_outcome() {
                return Ok(outcome);
            }
        }
    }

    fn finish(&mut self, terminal: TurnState, observer: &mut dyn GameObserver) -> TurnState {
        self.state = terminal;
        if let Some(outcome) = terminal.final_outcome() {
            let moves: Vec<String> = self.history.iter().map(ToString::to_string).collect();
            info!(%outcome, moves = ?moves, "Game finished");
            observer.game_finished(outcome, &self.board);
        }
        terminal
    }
}

impl std::fmt::Debug for TurnController<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("x", &self.x.name())
            .field("o", &self.o.name())
            .field("history", &self.history)
            .finish()
    }
}
