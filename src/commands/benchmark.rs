//! Benchmark command
//!
//! Plays many rounds against in-process referees in parallel and aggregates
//! the results.

use crate::core::Word;
use crate::dictionary::DictionaryIndex;
use crate::player::play_round;
use crate::session::LocalSession;
use crate::solver::StrategyKind;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub average_wrong: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Pick `count` random target words from the dictionary
#[must_use]
pub fn sample_targets(index: &DictionaryIndex, count: usize) -> Vec<Word> {
    use rand::prelude::IndexedRandom;

    index
        .words()
        .choose_multiple(&mut rand::rng(), count)
        .cloned()
        .collect()
}

/// Run the benchmark over a set of target words
///
/// Each round gets a fresh referee and a fresh engine; rounds run in
/// parallel. A round whose pool collapses (target missing from the
/// dictionary) counts as a loss.
#[must_use]
pub fn run_benchmark(
    index: &DictionaryIndex,
    strategy: StrategyKind,
    targets: &[Word],
    lives: u32,
) -> BenchmarkResult {
    let start = Instant::now();

    let summaries: Vec<_> = targets
        .par_iter()
        .map(|target| {
            let mut session = LocalSession::with_lives(target.clone(), lives);
            play_round(&mut session, index, strategy)
        })
        .collect();

    let duration = start.elapsed();

    let mut wins = 0;
    let mut total_guesses = 0;
    let mut total_wrong = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for summary in summaries.iter().flatten() {
        if summary.won {
            wins += 1;
        }
        let guesses = summary.num_guesses();
        total_guesses += guesses;
        total_wrong += summary.wrong_guesses();
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let total_rounds = targets.len();

    BenchmarkResult {
        total_rounds,
        wins,
        losses: total_rounds - wins,
        total_guesses,
        average_guesses: total_guesses as f64 / total_rounds.max(1) as f64,
        average_wrong: total_wrong as f64 / total_rounds.max(1) as f64,
        min_guesses: if distribution.is_empty() { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64(),
    }
}
