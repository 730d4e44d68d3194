//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod guess;
mod letters;
mod word;

pub use guess::Guess;
pub use letters::LetterSet;
pub use word::{Word, WordError};
