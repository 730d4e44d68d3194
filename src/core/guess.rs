//! Guess representation
//!
//! A guess submitted to the game is either a single letter or a full word.
//! Keeping the two cases tagged makes the lone-candidate word shortcut
//! type-safe instead of overloading one-character strings.

use super::Word;
use std::fmt;

/// A single guess: one letter, or the full word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// Guess a single letter
    Letter(u8),
    /// Guess the whole word
    Word(Word),
}

impl Guess {
    /// The guess as submitted over the wire
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Letter(l) => (*l as char).to_string(),
            Self::Word(w) => w.text().to_string(),
        }
    }

    /// The guessed letter, if this is a letter guess
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        match self {
            Self::Letter(l) => Some(*l),
            Self::Word(_) => None,
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(l) => write!(f, "letter '{}'", *l as char),
            Self::Word(w) => write!(f, "word \"{w}\""),
        }
    }
}
