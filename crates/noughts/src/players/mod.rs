//! Human move source and the terminal it talks through.

mod interactive;
mod menu;
mod terminal;

pub use interactive::{InteractiveSource, TEXT_PROMPT};
pub use menu::{parse_choice, render_menu, Select};
pub use terminal::{SharedTerminal, Terminal, QUIT_WORDS};
