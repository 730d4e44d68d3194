//! Formatting utilities for terminal output

use crate::core::Guess;

/// Symbol for a guess outcome
#[must_use]
pub const fn outcome_symbol(was_correct: bool) -> &'static str {
    if was_correct { "✓" } else { "✗" }
}

/// Format a guess for the guess trail
#[must_use]
pub fn format_guess(guess: &Guess) -> String {
    match guess {
        Guess::Letter(l) => format!("'{}'", *l as char),
        Guess::Word(w) => format!("\"{w}\""),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn outcome_symbols() {
        assert_eq!(outcome_symbol(true), "✓");
        assert_eq!(outcome_symbol(false), "✗");
    }

    #[test]
    fn format_letter_guess() {
        assert_eq!(format_guess(&Guess::Letter(b'e')), "'e'");
    }

    #[test]
    fn format_word_guess() {
        let guess = Guess::Word(Word::new("zoo").unwrap());
        assert_eq!(format_guess(&guess), "\"zoo\"");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
