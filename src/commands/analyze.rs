//! Length analysis command
//!
//! Shows the initial letter ranking the solver would use for a word length.

use crate::core::LetterSet;
use crate::dictionary::DictionaryIndex;
use crate::solver::ranking::{LetterCounts, rank_letters};

/// One row of the ranking table
pub struct LetterRank {
    pub letter: char,
    pub word_count: usize,
    pub occurrence_count: usize,
}

/// Result of analyzing a word length
pub struct AnalysisResult {
    pub length: usize,
    pub pool_size: usize,
    pub ranking: Vec<LetterRank>,
}

/// Compute the initial ranking for words of the given length
///
/// # Errors
///
/// Returns an error if the dictionary has no words of that length.
pub fn analyze_length(length: usize, index: &DictionaryIndex) -> Result<AnalysisResult, String> {
    let pool = index.words_of_length(length);
    if pool.is_empty() {
        return Err(format!("No dictionary words of length {length}"));
    }

    let counts = LetterCounts::tally(&pool);
    let ranking = rank_letters(&counts, LetterSet::EMPTY)
        .into_iter()
        .map(|letter| LetterRank {
            letter: letter as char,
            word_count: counts.word_count(letter),
            occurrence_count: counts.occurrence_count(letter),
        })
        .collect();

    Ok(AnalysisResult {
        length,
        pool_size: pool.len(),
        ranking,
    })
}
