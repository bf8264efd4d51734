//! Human player answering prompts on the terminal.

use super::menu::{parse_choice, render_menu, Select};
use super::terminal::SharedTerminal;
use crate::config::InputMode;
use noughts_engine::{
    Board, Column, Coordinate, InputSourceFailure, MoveSource, Player, Row, SessionError, SourceKind,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Prompt shown in text mode.
pub const TEXT_PROMPT: &str = "Enter a cell, e.g. B2 (q to quit): ";

/// Human player reading moves from a shared terminal.
///
/// Malformed answers are explained and asked again here; whether the
/// cell can be played is left to the turn controller.
pub struct InteractiveSource<R, W> {
    name: String,
    mode: InputMode,
    terminal: SharedTerminal<R, W>,
}

impl<R: BufRead, W: Write> InteractiveSource<R, W> {
    /// Creates an interactive player on `terminal`.
    pub fn new(name: impl Into<String>, mode: InputMode, terminal: SharedTerminal<R, W>) -> Self {
        let name = name.into();
        info!(player = %name, %mode, "Creating interactive player");
        Self {
            name,
            mode,
            terminal,
        }
    }

    /// Asks until the answer parses as a coordinate.
    #[instrument(skip(self))]
    fn ask_text(&mut self) -> Result<Coordinate, InputSourceFailure> {
        let mut terminal = self.terminal.borrow_mut();
        loop {
            let answer = terminal.ask(TEXT_PROMPT)?;
            match answer.parse::<Coordinate>() {
                Ok(coord) => return Ok(coord),
                Err(err) => terminal.say(err)?,
            }
        }
    }

    /// Asks for a column, then a row.
    #[instrument(skip(self))]
    fn ask_menu(&mut self) -> Result<Coordinate, InputSourceFailure> {
        let column: Column = self.choose()?;
        let row: Row = self.choose()?;
        self.terminal.borrow_mut().say("")?;
        Ok(Coordinate::from_parts(column, row))
    }

    fn choose<S: Select>(&mut self) -> Result<S, InputSourceFailure> {
        let prompt = render_menu::<S>();
        let mut terminal = self.terminal.borrow_mut();
        loop {
            let answer = terminal.ask(&prompt)?;
            match parse_choice::<S>(&answer) {
                Ok(choice) => return Ok(choice),
                Err(message) => terminal.say(message)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for InteractiveSource<R, W> {
    fn next_move(&mut self, _board: &Board, player: Player) -> Result<Coordinate, SessionError> {
        let coord = match self.mode {
            InputMode::Text => self.ask_text()?,
            InputMode::Menu => self.ask_menu()?,
        };
        debug!(player = %self.name, mark = %player, %coord, "Human chose cell");
        Ok(coord)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Interactive
    }
}
