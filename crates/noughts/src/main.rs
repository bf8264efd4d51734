//! Noughts and crosses: command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{GameConfig, InputMode, Terminal};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Start {
            against_computer,
            seed,
            input,
            config,
        } => run_start(against_computer, seed, input, config),
    }
}

/// Run a game on stdin/stdout
#[instrument]
fn run_start(
    against_computer: bool,
    seed: Option<u64>,
    input: Option<InputMode>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = GameConfig::load(config.as_deref())?.with_overrides(against_computer, seed, input);
    info!(?config, "Starting game");

    let terminal = Terminal::shared(std::io::stdin().lock(), std::io::stdout());
    let outcome = noughts::play(&config, &terminal).context("Game ended before a result")?;

    info!(%outcome, "Game complete");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
