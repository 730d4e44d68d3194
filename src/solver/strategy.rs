//! Letter-selection strategy variants
//!
//! Defines the Strategy trait and the two concrete variants. They differ in
//! how aggressively the pool is filtered, whether a lone candidate is guessed
//! as a full word, and what happens when a filtering pass leaves the pool
//! unchanged.

use crate::core::{LetterSet, Word};

/// A strategy for narrowing the pool and walking the ranked letter list
pub trait Strategy {
    /// Whether `word` survives filtering given the known letter sets
    fn retains(&self, word: &Word, correct: LetterSet, wrong: LetterSet) -> bool;

    /// Whether a pool of exactly one word is guessed outright as a full word
    fn guesses_last_word(&self) -> bool;

    /// Whether the selection cursor advances when filtering did not shrink
    /// the pool (instead of re-trying the same ranked letter)
    fn advances_cursor(&self) -> bool;
}

/// Enum wrapper for the strategy variants
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Greedy-reset variant (strict filter, full-word shortcut)
    Greedy(GreedyReset),
    /// Cursor-advance variant (default)
    Cursor(CursorAdvance),
}

impl Strategy for StrategyKind {
    fn retains(&self, word: &Word, correct: LetterSet, wrong: LetterSet) -> bool {
        match self {
            Self::Greedy(s) => s.retains(word, correct, wrong),
            Self::Cursor(s) => s.retains(word, correct, wrong),
        }
    }

    fn guesses_last_word(&self) -> bool {
        match self {
            Self::Greedy(s) => s.guesses_last_word(),
            Self::Cursor(s) => s.guesses_last_word(),
        }
    }

    fn advances_cursor(&self) -> bool {
        match self {
            Self::Greedy(s) => s.advances_cursor(),
            Self::Cursor(s) => s.advances_cursor(),
        }
    }
}

impl StrategyKind {
    /// Create strategy from name string
    ///
    /// Supported names: "greedy", "greedy-reset", "cursor", "cursor-advance".
    /// Defaults to cursor-advance if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "greedy" | "greedy-reset" => Self::Greedy(GreedyReset),
            _ => Self::Cursor(CursorAdvance),
        }
    }

    /// Human-readable variant name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Greedy(_) => "greedy-reset",
            Self::Cursor(_) => "cursor-advance",
        }
    }
}

/// Greedy-reset variant
///
/// Always guesses the top-ranked letter. Once any letter is confirmed, words
/// sharing none of the confirmed letters are discarded as well, and a pool of
/// exactly one word is guessed in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyReset;

impl Strategy for GreedyReset {
    fn retains(&self, word: &Word, correct: LetterSet, wrong: LetterSet) -> bool {
        if word.letters().intersects(wrong) {
            return false;
        }
        correct.is_empty() || word.letters().intersects(correct)
    }

    fn guesses_last_word(&self) -> bool {
        true
    }

    fn advances_cursor(&self) -> bool {
        false
    }
}

/// Cursor-advance variant
///
/// Filters only on wrong letters. When a guess leaves the pool unchanged the
/// cursor moves to the next-ranked letter rather than re-guessing; a shrinking
/// pool resets the cursor to the top of a fresh ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorAdvance;

impl Strategy for CursorAdvance {
    fn retains(&self, word: &Word, _correct: LetterSet, wrong: LetterSet) -> bool {
        !word.letters().intersects(wrong)
    }

    fn guesses_last_word(&self) -> bool {
        false
    }

    fn advances_cursor(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn letters(chars: &[u8]) -> LetterSet {
        chars.iter().copied().collect()
    }

    #[test]
    fn from_name_recognizes_variants() {
        assert_eq!(StrategyKind::from_name("greedy").name(), "greedy-reset");
        assert_eq!(
            StrategyKind::from_name("greedy-reset").name(),
            "greedy-reset"
        );
        assert_eq!(StrategyKind::from_name("cursor").name(), "cursor-advance");
    }

    #[test]
    fn from_name_defaults_to_cursor() {
        assert_eq!(StrategyKind::from_name("banana").name(), "cursor-advance");
        assert_eq!(StrategyKind::from_name("").name(), "cursor-advance");
    }

    #[test]
    fn both_variants_drop_words_with_wrong_letters() {
        let w = word("cart");
        let wrong = letters(&[b't']);

        assert!(!GreedyReset.retains(&w, LetterSet::EMPTY, wrong));
        assert!(!CursorAdvance.retains(&w, LetterSet::EMPTY, wrong));
    }

    #[test]
    fn greedy_requires_a_shared_correct_letter() {
        let correct = letters(&[b'c']);
        let wrong = LetterSet::EMPTY;

        assert!(GreedyReset.retains(&word("cat"), correct, wrong));
        assert!(!GreedyReset.retains(&word("dog"), correct, wrong));
    }

    #[test]
    fn greedy_keeps_everything_before_first_correct_letter() {
        assert!(GreedyReset.retains(&word("dog"), LetterSet::EMPTY, LetterSet::EMPTY));
    }

    #[test]
    fn cursor_ignores_correct_letters_when_filtering() {
        let correct = letters(&[b'c']);
        assert!(CursorAdvance.retains(&word("dog"), correct, LetterSet::EMPTY));
    }

    #[test]
    fn shortcut_and_cursor_flags_differ() {
        assert!(GreedyReset.guesses_last_word());
        assert!(!GreedyReset.advances_cursor());
        assert!(!CursorAdvance.guesses_last_word());
        assert!(CursorAdvance.advances_cursor());
    }
}
