//! Dictionary index for Hangman solving
//!
//! Holds the full word list and answers length queries. The embedded list is
//! compiled into the binary; custom lists can be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;

/// The loaded word list, queryable by word length
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    words: Vec<Word>,
}

impl DictionaryIndex {
    /// Build an index over an already-loaded word list
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build an index over the embedded dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(DICTIONARY))
    }

    /// All words in the backing list
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the backing list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the backing list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words of exactly length `n`, preserving original order
    ///
    /// The backing list is not modified; the result is an independent pool.
    #[must_use]
    pub fn words_of_length(&self, n: usize) -> Vec<Word> {
        self.words.iter().filter(|w| w.len() == n).cloned().collect()
    }
}
