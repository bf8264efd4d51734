//! Seats the move sources for a configured game and plays it.

use crate::config::GameConfig;
use crate::display::ConsoleObserver;
use crate::players::{InteractiveSource, SharedTerminal};
use noughts_engine::{GameOutcome, InputSourceFailure, RandomSource, SessionError, TurnController};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{info, instrument};

/// Name shown for the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Plays one game on `terminal` and returns how it ended.
///
/// X is always a human. O is the computer when
/// `config.against_computer()` is set, otherwise a second human on the
/// same terminal.
///
/// # Errors
///
/// Returns the first fatal error: input ending, the player quitting,
/// or the opening banner failing to write. Write failures while the
/// board and messages are shown are logged and play continues.
#[instrument(skip_all, fields(against_computer = config.against_computer(), input = %config.input()))]
pub fn play<R: BufRead, W: Write>(
    config: &GameConfig,
    terminal: &SharedTerminal<R, W>,
) -> Result<GameOutcome, SessionError> {
    let mut observer = ConsoleObserver::new(Rc::clone(terminal));
    let human_x = InteractiveSource::new("Player x", *config.input(), Rc::clone(terminal));

    let outcome = if *config.against_computer() {
        announce(terminal, "Starting single-player game against the computer. You are x.\n")?;
        let seed = config.seed().unwrap_or_else(rand::random);
        info!(seed, "Seeding computer player");
        let computer = RandomSource::new(COMPUTER_NAME, StdRng::seed_from_u64(seed));
        TurnController::new(human_x, computer).run(&mut observer)?
    } else {
        announce(terminal, "Starting two-player game.\n")?;
        let human_o = InteractiveSource::new("Player o", *config.input(), Rc::clone(terminal));
        TurnController::new(human_x, human_o).run(&mut observer)?
    };

    info!(%outcome, "Session over");
    Ok(outcome)
}

fn announce<R: BufRead, W: Write>(
    terminal: &SharedTerminal<R, W>,
    text: &str,
) -> Result<(), InputSourceFailure> {
    terminal.borrow_mut().say(text)?;
    Ok(())
}
