//! Letter-frequency ranking over a candidate pool
//!
//! Two counts drive the ranking: how many distinct pool words contain a
//! letter, and how many times the letter occurs across all pool words.
//! The ranked list is rebuilt from scratch whenever the pool changes, never
//! mutated in place.

use crate::core::{LetterSet, Word};
use rustc_hash::FxHashMap;

/// Occurrence counts for every letter present in a candidate pool
#[derive(Debug, Clone, Default)]
pub struct LetterCounts {
    /// letter -> number of distinct words containing it (each word counts once)
    by_word: FxHashMap<u8, usize>,
    /// letter -> total occurrences across all positions of all words
    by_occurrence: FxHashMap<u8, usize>,
}

impl LetterCounts {
    /// Tally both counts over a pool of words
    #[must_use]
    pub fn tally(pool: &[Word]) -> Self {
        let mut by_word: FxHashMap<u8, usize> = FxHashMap::default();
        let mut by_occurrence: FxHashMap<u8, usize> = FxHashMap::default();

        for word in pool {
            for letter in word.letters().iter() {
                *by_word.entry(letter).or_insert(0) += 1;
            }
            for &letter in word.bytes() {
                *by_occurrence.entry(letter).or_insert(0) += 1;
            }
        }

        Self {
            by_word,
            by_occurrence,
        }
    }

    /// How many distinct pool words contain `letter`
    #[must_use]
    pub fn word_count(&self, letter: u8) -> usize {
        self.by_word.get(&letter).copied().unwrap_or(0)
    }

    /// Total occurrences of `letter` across the pool
    #[must_use]
    pub fn occurrence_count(&self, letter: u8) -> usize {
        self.by_occurrence.get(&letter).copied().unwrap_or(0)
    }
}

/// Build the ranked letter list for a set of counts
///
/// Letters sort by word count descending, ties by occurrence count descending,
/// remaining ties by the letter itself ascending so the order is deterministic
/// for a given pool. Letters in `exclude` are dropped before sorting.
#[must_use]
pub fn rank_letters(counts: &LetterCounts, exclude: LetterSet) -> Vec<u8> {
    let mut letters: Vec<u8> = counts
        .by_word
        .keys()
        .copied()
        .filter(|&l| !exclude.contains(l))
        .collect();

    letters.sort_unstable_by(|&a, &b| {
        counts
            .word_count(b)
            .cmp(&counts.word_count(a))
            .then_with(|| counts.occurrence_count(b).cmp(&counts.occurrence_count(a)))
            .then_with(|| a.cmp(&b))
    });

    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn pool(words: &[&str]) -> Vec<Word> {
        words_from_slice(words)
    }

    #[test]
    fn word_count_counts_each_word_once() {
        let counts = LetterCounts::tally(&pool(&["moon", "mood"]));

        // 'o' appears twice in each word but only two words contain it
        assert_eq!(counts.word_count(b'o'), 2);
        assert_eq!(counts.occurrence_count(b'o'), 4);
        assert_eq!(counts.word_count(b'm'), 2);
        assert_eq!(counts.word_count(b'd'), 1);
    }

    #[test]
    fn absent_letter_counts_zero() {
        let counts = LetterCounts::tally(&pool(&["cat"]));
        assert_eq!(counts.word_count(b'z'), 0);
        assert_eq!(counts.occurrence_count(b'z'), 0);
    }

    #[test]
    fn ranking_cat_car_can() {
        // From the three-word pool: c=3 words, a=3 words, t/r/n one each
        let counts = LetterCounts::tally(&pool(&["cat", "car", "can"]));
        let ranked = rank_letters(&counts, LetterSet::EMPTY);

        assert_eq!(counts.word_count(b'c'), 3);
        assert_eq!(counts.word_count(b'a'), 3);
        assert_eq!(counts.occurrence_count(b'c'), 3);
        assert_eq!(counts.occurrence_count(b'a'), 3);

        // Full tie between 'a' and 'c' breaks lexicographically
        assert_eq!(&ranked[..2], &[b'a', b'c']);
        assert_eq!(&ranked[2..], &[b'n', b'r', b't']);
    }

    #[test]
    fn occurrence_count_breaks_word_count_ties() {
        // 'e' and 's' each in both words, but 'e' occurs three times total
        let counts = LetterCounts::tally(&pool(&["seed", "sale"]));
        let ranked = rank_letters(&counts, LetterSet::EMPTY);

        assert_eq!(counts.word_count(b'e'), 2);
        assert_eq!(counts.word_count(b's'), 2);
        assert!(counts.occurrence_count(b'e') > counts.occurrence_count(b's'));
        assert_eq!(ranked[0], b'e');
        assert_eq!(ranked[1], b's');
    }

    #[test]
    fn ranking_is_deterministic() {
        let words = pool(&["stone", "tones", "onset", "notes", "seton"]);
        let counts = LetterCounts::tally(&words);

        let first = rank_letters(&counts, LetterSet::EMPTY);
        for _ in 0..10 {
            let again = rank_letters(&LetterCounts::tally(&words), LetterSet::EMPTY);
            assert_eq!(first, again);
        }
    }

    #[test]
    fn excluded_letters_are_dropped() {
        let counts = LetterCounts::tally(&pool(&["cat", "car", "can"]));
        let exclude: LetterSet = [b'a', b'c'].into_iter().collect();
        let ranked = rank_letters(&counts, exclude);

        assert!(!ranked.contains(&b'a'));
        assert!(!ranked.contains(&b'c'));
        assert_eq!(ranked, vec![b'n', b'r', b't']);
    }

    #[test]
    fn empty_pool_ranks_nothing() {
        let counts = LetterCounts::tally(&[]);
        assert!(rank_letters(&counts, LetterSet::EMPTY).is_empty());
    }
}
