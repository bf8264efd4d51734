//! Line-oriented terminal shared by the prompts and the board display.

use noughts_engine::InputSourceFailure;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, instrument};

/// Words that end the session at any prompt.
pub const QUIT_WORDS: [&str; 2] = ["q", "quit"];

/// Terminal shared between both players' prompts and the console observer.
pub type SharedTerminal<R, W> = Rc<RefCell<Terminal<R, W>>>;

/// A reader for answers and a writer for everything shown to the players.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal over `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Creates a terminal ready to be handed to several collaborators.
    pub fn shared(input: R, output: W) -> SharedTerminal<R, W> {
        Rc::new(RefCell::new(Self::new(input, output)))
    }

    /// Shows `prompt` and blocks for one line of input.
    ///
    /// Returns the line with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, at end of input, and when the player types
    /// one of [`QUIT_WORDS`].
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> Result<String, InputSourceFailure> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(InputSourceFailure::new("input ended before the game finished"));
        }

        let answer = line.trim();
        if QUIT_WORDS.iter().any(|word| word.eq_ignore_ascii_case(answer)) {
            return Err(InputSourceFailure::new("player quit"));
        }
        debug!(answer, "Read answer");
        Ok(answer.to_string())
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl std::fmt::Display) -> std::io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Returns the output writer.
    pub fn output(&self) -> &W {
        &self.output
    }
}
