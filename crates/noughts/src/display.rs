//! Text rendering of the board and console reporting of game events.

use crate::players::SharedTerminal;
use noughts_engine::{
    Board, Column, GameObserver, GameOutcome, InvalidMove, Move, MoveSource, Player, SourceKind,
};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::warn;

/// Renders the board with column letters across the top and row numbers
/// down the side:
///
/// ```text
///     A B C
///
/// 1   x - -
/// 2   - o -
/// 3   - - -
/// ```
pub fn render_board(board: &Board) -> String {
    let header: Vec<String> = Column::iter().map(|column| column.to_string()).collect();
    let mut out = format!("    {}\n\n", header.join(" "));
    for (index, row) in board.rows().enumerate() {
        let cells: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
        out.push_str(&format!("{}   {}\n", index + 1, cells.join(" ")));
    }
    out
}

/// Reports game events on the shared terminal.
pub struct ConsoleObserver<R, W> {
    terminal: SharedTerminal<R, W>,
}

impl<R: BufRead, W: Write> ConsoleObserver<R, W> {
    /// Creates an observer writing to `terminal`.
    pub fn new(terminal: SharedTerminal<R, W>) -> Self {
        Self { terminal }
    }

    /// Writes one message; write failures are logged, the game goes on.
    fn emit(&self, text: impl std::fmt::Display) {
        if let Err(err) = self.terminal.borrow_mut().say(text) {
            warn!(error = %err, "Failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> GameObserver for ConsoleObserver<R, W> {
    fn turn_started(&mut self, board: &Board, player: Player, source: &dyn MoveSource) {
        if source.kind() == SourceKind::Interactive {
            self.emit(render_board(board));
            self.emit(format!("{} to move.\n", player));
        }
    }

    fn move_rejected(&mut self, _player: Player, error: &InvalidMove, _source: &dyn MoveSource) {
        self.emit(format!("{}. Try again.", error));
    }

    fn move_applied(&mut self, mv: &Move, _board: &Board, source: &dyn MoveSource) {
        match source.kind() {
            SourceKind::Interactive => self.emit(format!("Placed {}.\n", mv)),
            SourceKind::Random => self.emit(format!("{} placed {}.\n", source.name(), mv)),
        }
    }

    fn game_finished(&mut self, outcome: GameOutcome, board: &Board) {
        self.emit(render_board(board));
        self.emit(outcome);
    }
}
