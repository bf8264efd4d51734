//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::InputMode;
use std::path::PathBuf;

/// Noughts and crosses on the command line
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play noughts and crosses on the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Starts a game of noughts and crosses
    Start {
        /// Play against the computer, which plays o
        #[arg(short = 'C', long)]
        against_computer: bool,

        /// Seed for the computer's moves, for repeatable games
        #[arg(long)]
        seed: Option<u64>,

        /// How to enter moves (defaults to the config file, then menu)
        #[arg(long, value_enum)]
        input: Option<InputMode>,

        /// Path to a TOML config file (defaults to ./noughts.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_defaults() {
        let cli = Cli::try_parse_from(["noughts", "start"]).unwrap();
        let Command::Start {
            against_computer,
            seed,
            input,
            config,
        } = cli.command;
        assert!(!against_computer);
        assert_eq!(seed, None);
        assert_eq!(input, None);
        assert_eq!(config, None);
    }

    #[test]
    fn test_short_computer_flag() {
        let cli = Cli::try_parse_from(["noughts", "start", "-C", "--seed", "5", "--input", "text"])
            .unwrap();
        let Command::Start {
            against_computer,
            seed,
            input,
            ..
        } = cli.command;
        assert!(against_computer);
        assert_eq!(seed, Some(5));
        assert_eq!(input, Some(InputMode::Text));
    }

    #[test]
    fn test_start_is_required() {
        assert!(Cli::try_parse_from(["noughts"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
