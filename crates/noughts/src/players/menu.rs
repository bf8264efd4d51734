//! Numbered menus for picking a column and a row.

use noughts_engine::{Column, Row};

/// A closed set of options a player picks from by number or label.
pub trait Select: Sized + Copy + std::fmt::Display + 'static {
    /// Heading shown above the options.
    const HEADING: &'static str;

    /// All options, in menu order.
    fn options() -> &'static [Self];

    /// Parses an option from its label.
    fn from_label(label: &str) -> Option<Self>;
}

impl Select for Column {
    const HEADING: &'static str = "Column";

    fn options() -> &'static [Self] {
        &[Column::A, Column::B, Column::C]
    }

    fn from_label(label: &str) -> Option<Self> {
        Column::from_label(label)
    }
}

impl Select for Row {
    const HEADING: &'static str = "Row";

    fn options() -> &'static [Self] {
        &[Row::One, Row::Two, Row::Three]
    }

    fn from_label(label: &str) -> Option<Self> {
        Row::from_label(label)
    }
}

/// Builds the menu prompt for `S`.
pub fn render_menu<S: Select>() -> String {
    let mut prompt = format!("Please select a {}:\n", S::HEADING);
    for (idx, option) in S::options().iter().enumerate() {
        prompt.push_str(&format!("  {}. {}\n", idx + 1, option));
    }
    prompt.push_str(&format!(
        "Respond with the number (1-{}) or label: ",
        S::options().len()
    ));
    prompt
}

/// Parses an answer to the menu for `S`: a 1-based number or a label.
///
/// Returns a message for the player when the answer matches nothing.
pub fn parse_choice<S: Select>(answer: &str) -> Result<S, String> {
    let answer = answer.trim();
    if let Ok(num) = answer.parse::<usize>()
        && let Some(option) = num.checked_sub(1).and_then(|i| S::options().get(i))
    {
        return Ok(*option);
    }

    S::from_label(answer).ok_or_else(|| {
        format!(
            "'{}' is not a {}: pick 1-{} or one of the labels",
            answer,
            S::HEADING.to_lowercase(),
            S::options().len()
        )
    })
}
