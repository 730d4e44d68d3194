//! Per-round candidate pool engine
//!
//! Owns all state for a single round: the shrinking pool, the confirmed and
//! refuted letter sets, the ranked letter list, and the selection cursor.
//! Nothing survives across rounds; callers build a fresh engine each time.

use super::ranking::{LetterCounts, rank_letters};
use super::strategy::Strategy;
use crate::core::{Guess, LetterSet, Word};
use crate::dictionary::DictionaryIndex;
use std::fmt;

/// Errors the engine can surface instead of guessing blindly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Every known word has been eliminated; the target is not in the
    /// dictionary
    NoCandidates,
    /// The cursor walked past the end of the ranked list
    LettersExhausted,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "no candidates remain in the pool"),
            Self::LettersExhausted => write!(f, "ranked letter list is exhausted"),
        }
    }
}

impl std::error::Error for EngineError {}

/// The candidate pool and heuristic state for one round
pub struct Engine<S: Strategy> {
    strategy: S,
    pool: Vec<Word>,
    correct: LetterSet,
    wrong: LetterSet,
    ranking: Vec<u8>,
    cursor: usize,
}

impl<S: Strategy> Engine<S> {
    /// Start a round over an explicit candidate pool
    #[must_use]
    pub fn new(strategy: S, pool: Vec<Word>) -> Self {
        let counts = LetterCounts::tally(&pool);
        let ranking = rank_letters(&counts, LetterSet::EMPTY);

        Self {
            strategy,
            pool,
            correct: LetterSet::EMPTY,
            wrong: LetterSet::EMPTY,
            ranking,
            cursor: 0,
        }
    }

    /// Start a round for a target word length announced by the session
    #[must_use]
    pub fn for_length(strategy: S, index: &DictionaryIndex, target_length: usize) -> Self {
        Self::new(strategy, index.words_of_length(target_length))
    }

    /// Words still consistent with every outcome seen so far
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// Current pool size
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Letters confirmed present in the target
    #[must_use]
    pub const fn correct_letters(&self) -> LetterSet {
        self.correct
    }

    /// Letters confirmed absent from the target
    #[must_use]
    pub const fn wrong_letters(&self) -> LetterSet {
        self.wrong
    }

    /// The current ranked letter list
    #[must_use]
    pub fn ranking(&self) -> &[u8] {
        &self.ranking
    }

    /// Choose the next guess
    ///
    /// Scans the ranked list from the cursor position, skipping any letter
    /// whose outcome is already known, so a letter is never guessed twice.
    ///
    /// # Errors
    ///
    /// `NoCandidates` if the pool is empty; `LettersExhausted` if every
    /// ranked letter has already been tried.
    pub fn select_next_guess(&self) -> Result<Guess, EngineError> {
        if self.pool.is_empty() {
            return Err(EngineError::NoCandidates);
        }

        if self.pool.len() == 1 && self.strategy.guesses_last_word() {
            return Ok(Guess::Word(self.pool[0].clone()));
        }

        let known = self.correct.union(self.wrong);
        self.ranking
            .iter()
            .skip(self.cursor)
            .copied()
            .find(|&l| !known.contains(l))
            .map(Guess::Letter)
            .ok_or(EngineError::LettersExhausted)
    }

    /// Record a guess outcome and narrow the pool
    ///
    /// Filters the pool through the strategy's predicate. A changed pool size
    /// triggers a fresh count tally and ranking with the cursor reset to the
    /// top; an unchanged pool advances the cursor instead (cursor-advance
    /// variant) and leaves counts untouched.
    pub fn apply_outcome(&mut self, guess: &Guess, was_correct: bool) {
        match guess {
            Guess::Letter(letter) => {
                if was_correct {
                    self.correct.insert(*letter);
                } else {
                    self.wrong.insert(*letter);
                }
            }
            Guess::Word(word) => {
                // A refuted full-word guess eliminates exactly that word
                if !was_correct {
                    let text = word.text().to_string();
                    self.pool.retain(|w| w.text() != text);
                    self.refresh_ranking();
                    self.cursor = 0;
                }
                return;
            }
        }

        let before = self.pool.len();
        let (correct, wrong) = (self.correct, self.wrong);
        let Self { pool, strategy, .. } = self;
        pool.retain(|w| strategy.retains(w, correct, wrong));

        if self.pool.len() == before {
            if self.strategy.advances_cursor() {
                self.cursor += 1;
            }
        } else {
            self.refresh_ranking();
            self.cursor = 0;
        }
    }

    fn refresh_ranking(&mut self) {
        let counts = LetterCounts::tally(&self.pool);
        self.ranking = rank_letters(&counts, self.correct.union(self.wrong));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use crate::solver::strategy::{CursorAdvance, GreedyReset};

    fn pool(words: &[&str]) -> Vec<Word> {
        words_from_slice(words)
    }

    #[test]
    fn initial_state_from_length() {
        let index = DictionaryIndex::new(pool(&["cat", "car", "can", "horse"]));
        let engine = Engine::new(GreedyReset, index.words_of_length(3));

        assert_eq!(engine.pool_size(), 3);
        assert!(engine.correct_letters().is_empty());
        assert!(engine.wrong_letters().is_empty());
        assert!(!engine.ranking().is_empty());
    }

    #[test]
    fn selection_is_deterministic() {
        let make = || Engine::new(CursorAdvance, pool(&["stone", "tones", "notes"]));
        let first = make().select_next_guess().unwrap();
        for _ in 0..5 {
            assert_eq!(make().select_next_guess().unwrap(), first);
        }
    }

    #[test]
    fn single_candidate_guesses_the_word() {
        // Greedy-reset guesses the lone word outright
        let engine = Engine::new(GreedyReset, pool(&["zoo"]));
        let guess = engine.select_next_guess().unwrap();
        assert_eq!(guess, Guess::Word(Word::new("zoo").unwrap()));
    }

    #[test]
    fn single_candidate_cursor_variant_keeps_guessing_letters() {
        let engine = Engine::new(CursorAdvance, pool(&["zoo"]));
        let guess = engine.select_next_guess().unwrap();
        assert!(matches!(guess, Guess::Letter(_)));
    }

    #[test]
    fn empty_pool_is_an_explicit_error() {
        let engine = Engine::new(GreedyReset, Vec::new());
        assert_eq!(
            engine.select_next_guess().unwrap_err(),
            EngineError::NoCandidates
        );
    }

    #[test]
    fn cat_car_can_round() {
        // Spec'd walkthrough: 'c' correct keeps all three, 't' wrong drops "cat"
        let mut engine = Engine::new(GreedyReset, pool(&["cat", "car", "can"]));

        engine.apply_outcome(&Guess::Letter(b'c'), true);
        assert_eq!(engine.pool_size(), 3);
        assert!(engine.correct_letters().contains(b'c'));

        engine.apply_outcome(&Guess::Letter(b't'), false);
        assert_eq!(engine.pool_size(), 2);
        assert!(engine.pool().iter().all(|w| w.text() != "cat"));
    }

    #[test]
    fn pool_never_grows() {
        let mut engine = Engine::new(CursorAdvance, pool(&["cat", "car", "can", "cow", "cup"]));
        let mut last = engine.pool_size();

        for (letter, correct) in [(b'a', true), (b'x', false), (b't', false), (b'r', true)] {
            engine.apply_outcome(&Guess::Letter(letter), correct);
            assert!(engine.pool_size() <= last);
            last = engine.pool_size();
        }
    }

    #[test]
    fn wrong_letters_never_survive_in_pool() {
        let mut engine = Engine::new(CursorAdvance, pool(&["cat", "dog", "pig", "bat", "rat"]));

        engine.apply_outcome(&Guess::Letter(b'a'), false);
        engine.apply_outcome(&Guess::Letter(b'g'), false);

        for word in engine.pool() {
            assert!(!word.has_letter(b'a'));
            assert!(!word.has_letter(b'g'));
        }
    }

    #[test]
    fn known_letters_are_never_reguessed() {
        let mut engine = Engine::new(CursorAdvance, pool(&["cat", "car", "can", "cap"]));
        let mut seen = Vec::new();

        // Feed outcomes as if the target were "can"
        let target = Word::new("can").unwrap();
        for _ in 0..6 {
            let guess = match engine.select_next_guess() {
                Ok(g) => g,
                Err(_) => break,
            };
            if let Guess::Letter(l) = guess {
                assert!(!seen.contains(&l), "letter {} guessed twice", l as char);
                seen.push(l);
                engine.apply_outcome(&Guess::Letter(l), target.has_letter(l));
            }
        }
        assert!(!seen.is_empty());
    }

    #[test]
    fn greedy_drops_words_sharing_no_correct_letter() {
        let mut engine = Engine::new(GreedyReset, pool(&["cat", "dog", "cow"]));

        engine.apply_outcome(&Guess::Letter(b'c'), true);

        // "dog" shares no confirmed letter and is discarded
        assert_eq!(engine.pool_size(), 2);
        assert!(engine.pool().iter().all(|w| w.has_letter(b'c')));
    }

    #[test]
    fn cursor_advances_without_recomputation_when_pool_holds() {
        // Every word contains 'o', so a correct 'o' cannot shrink the pool
        let mut engine = Engine::new(CursorAdvance, pool(&["toon", "moon", "noon"]));
        let ranking_before = engine.ranking().to_vec();

        engine.apply_outcome(&Guess::Letter(b'o'), true);

        assert_eq!(engine.pool_size(), 3);
        assert_eq!(engine.ranking(), ranking_before.as_slice());

        // Next selection moves on to another letter
        let next = engine.select_next_guess().unwrap();
        assert_ne!(next, Guess::Letter(b'o'));
    }

    #[test]
    fn cursor_walks_past_exhausted_letters_without_looping() {
        let mut engine = Engine::new(CursorAdvance, pool(&["noon", "moon"]));

        // Drain the ranked list with non-shrinking outcomes
        let mut guesses = 0;
        loop {
            match engine.select_next_guess() {
                Ok(Guess::Letter(l)) => {
                    guesses += 1;
                    assert!(guesses < 30, "selection loop did not terminate");
                    // 'o' and 'n' are in both words; pretend everything else
                    // is also correct so the pool never shrinks
                    engine.apply_outcome(&Guess::Letter(l), true);
                }
                Ok(Guess::Word(_)) => unreachable!("cursor variant has no word shortcut"),
                Err(EngineError::LettersExhausted) => break,
                Err(e) => panic!("unexpected engine error: {e}"),
            }
        }
        assert!(guesses >= 2);
    }

    #[test]
    fn refuted_word_guess_leaves_the_pool() {
        let mut engine = Engine::new(GreedyReset, pool(&["zoo"]));

        let guess = engine.select_next_guess().unwrap();
        assert!(matches!(guess, Guess::Word(_)));

        engine.apply_outcome(&guess, false);
        assert_eq!(engine.pool_size(), 0);
        assert_eq!(
            engine.select_next_guess().unwrap_err(),
            EngineError::NoCandidates
        );
    }

    #[test]
    fn narrowing_down_to_win_with_greedy() {
        // Drive a full round against a known target
        let words = pool(&["cat", "car", "can", "cow", "dog", "pig"]);
        let target = Word::new("car").unwrap();
        let mut engine = Engine::new(GreedyReset, words);

        for _ in 0..10 {
            match engine.select_next_guess().unwrap() {
                Guess::Letter(l) => {
                    engine.apply_outcome(&Guess::Letter(l), target.has_letter(l));
                }
                Guess::Word(w) => {
                    assert_eq!(w.text(), "car");
                    return;
                }
            }
        }
        panic!("never narrowed to the target word");
    }
}
