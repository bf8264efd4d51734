//! Noughts and crosses on the command line.
//!
//! Terminal collaborators for [`noughts_engine`]: the interactive human
//! player, the console display, TOML configuration, and the session
//! wiring that seats players and runs a game.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod display;
mod players;
mod session;

pub use config::{ConfigError, GameConfig, InputMode, DEFAULT_CONFIG_PATH};
pub use display::{render_board, ConsoleObserver};
pub use players::{
    parse_choice, render_menu, InteractiveSource, Select, SharedTerminal, Terminal, QUIT_WORDS,
    TEXT_PROMPT,
};
pub use session::{play, COMPUTER_NAME};
