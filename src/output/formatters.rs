//! Small rendering helpers shared by the display functions

use crate::core::{Constraints, Feedback, Tile, Word};
use colored::Colorize;

/// Render a guess with its tiles: each letter colored by verdict
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.tiles())
        .map(|(&c, tile)| {
            let letter = (c as char).to_uppercase().to_string();
            match tile {
                Tile::Green => letter.on_green().black().bold().to_string(),
                Tile::Yellow => letter.on_yellow().black().bold().to_string(),
                Tile::Gray => letter.on_bright_black().white().to_string(),
            }
        })
        .collect()
}

/// Render the confirmed positions as a board row, dots for open slots
#[must_use]
pub fn board_row(constraints: &Constraints) -> String {
    constraints
        .confirmed()
        .iter()
        .map(|slot| slot.map_or('.', |c| (c as char).to_ascii_uppercase()))
        .collect()
}

/// Horizontal bar for distribution charts
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let filled = if max_count > 0 {
        (count * width / max_count).max(usize::from(count > 0))
    } else {
        0
    };
    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width.saturating_sub(filled)).bright_black()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_row_shows_confirmed_positions() {
        let c = Constraints::new().fix(0, b'a').fix(3, b'l');
        assert_eq!(board_row(&c), "A..L.");
        assert_eq!(board_row(&Constraints::new()), ".....");
    }

    #[test]
    fn distribution_bar_widths() {
        // Full bar at the maximum, nonzero counts always visible.
        assert!(distribution_bar(10, 10, 20).contains("█"));
        assert!(!distribution_bar(0, 10, 20).contains("█"));
        assert!(distribution_bar(1, 1000, 20).contains("█"));
    }
}
