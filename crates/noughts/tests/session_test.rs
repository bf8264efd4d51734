//! Whole games played through the terminal collaborators.

use noughts::{play, GameConfig, InputMode, Terminal};
use noughts_engine::{GameOutcome, Player, SessionError};

fn config(against_computer: bool, seed: Option<u64>, input: InputMode) -> GameConfig {
    GameConfig::default().with_overrides(against_computer, seed, Some(input))
}

/// Plays a game reading `input`, returning the result and everything printed.
fn run(config: &GameConfig, input: &'static str) -> (Result<GameOutcome, SessionError>, String) {
    let terminal = Terminal::shared(input.as_bytes(), Vec::new());
    let result = play(config, &terminal);
    let transcript = String::from_utf8(terminal.borrow().output().clone()).unwrap();
    (result, transcript)
}

#[test]
fn test_two_player_text_game_left_column_win() {
    let (result, out) = run(&config(false, None, InputMode::Text), "a1\nb1\na2\nb2\na3\n");

    assert_eq!(result.unwrap(), GameOutcome::Win(Player::X));
    assert!(out.starts_with("Starting two-player game.\n"));
    assert!(out.contains("x to move."));
    assert!(out.contains("o to move."));
    assert!(out.contains("Placed x at A1."));
    assert!(out.contains("Placed o at B2."));
    assert!(out.contains("1   x o -\n2   x o -\n3   x - -\n"));
    assert!(out.ends_with("x wins!\n"));
}

#[test]
fn test_two_player_menu_game() {
    // A1, B1, A2, B2, A3 as column/row menu picks.
    let (result, out) = run(
        &config(false, None, InputMode::Menu),
        "1\n1\n2\n1\n1\n2\n2\n2\n1\n3\n",
    );

    assert_eq!(result.unwrap(), GameOutcome::Win(Player::X));
    assert!(out.contains("Please select a Column:"));
    assert!(out.contains("Please select a Row:"));
    assert!(out.ends_with("x wins!\n"));
}

#[test]
fn test_taken_and_malformed_cells_are_reprompted() {
    let (result, out) = run(
        &config(false, None, InputMode::Text),
        "a1\na1\nzz\nb1\na2\nb2\na3\n",
    );

    assert_eq!(result.unwrap(), GameOutcome::Win(Player::X));
    assert!(out.contains("Cell A1 is already taken. Try again."));
    assert!(out.contains("'zz' is not a coordinate"));
}

#[test]
fn test_draw_game() {
    // x o x / x o o / o x x
    let (result, out) = run(
        &config(false, None, InputMode::Text),
        "a1\nb1\nc1\nb2\na2\nc2\nb3\na3\nc3\n",
    );

    assert_eq!(result.unwrap(), GameOutcome::Draw);
    assert!(out.ends_with("Draw! Game over.\n"));
}

#[test]
fn test_input_ending_mid_game_is_an_error() {
    let (result, out) = run(&config(false, None, InputMode::Text), "a1\n");

    assert!(matches!(result, Err(SessionError::Input(_))));
    assert!(out.contains("Placed x at A1."));
    assert!(!out.contains("wins!"));
}

#[test]
fn test_quit_ends_session() {
    let (result, _) = run(&config(false, None, InputMode::Text), "a1\nquit\n");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("player quit"));
}

/// Tries every cell in order; taken cells are rejected and the next is tried.
const EVERY_CELL: &str = "a1\nb1\nc1\na2\nb2\nc2\na3\nb3\nc3\n";

#[test]
fn test_single_player_game_against_computer() {
    let (result, out) = run(&config(true, Some(11), InputMode::Text), EVERY_CELL);

    assert!(result.unwrap().is_over());
    assert!(out.starts_with("Starting single-player game against the computer. You are x.\n"));
    assert!(out.contains("Computer placed o at"));
    assert!(!out.contains("o to move."));
}

#[test]
fn test_seeded_games_repeat() {
    let seeded = config(true, Some(2024), InputMode::Text);
    let (first, first_out) = run(&seeded, EVERY_CELL);
    let (second, second_out) = run(&seeded, EVERY_CELL);

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(first_out, second_out);
}
