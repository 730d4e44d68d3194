//! Test all words - comprehensive solver evaluation
//!
//! Runs the solver against every dictionary word and generates statistics.

use crate::dictionary::DictionaryIndex;
use crate::player::play_round;
use crate::session::LocalSession;
use crate::solver::StrategyKind;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub average_wrong: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
}

/// Run the solver on every dictionary word (or a limited subset)
#[must_use]
pub fn run_test_all(
    index: &DictionaryIndex,
    strategy: StrategyKind,
    limit: Option<usize>,
    lives: u32,
) -> TestAllStatistics {
    let test_words: Vec<_> = index
        .words()
        .iter()
        .take(limit.unwrap_or(index.len()))
        .collect();

    println!("Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut solved = 0;
    let mut failed = 0;
    let mut total_guesses = 0;
    let mut total_wrong = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut per_word: Vec<(String, usize)> = Vec::new();

    let total_start = Instant::now();

    for (idx, target) in test_words.iter().enumerate() {
        let mut session = LocalSession::with_lives((*target).clone(), lives);

        match play_round(&mut session, index, strategy) {
            Ok(summary) if summary.won => {
                solved += 1;
                let guesses = summary.num_guesses();
                total_guesses += guesses;
                total_wrong += summary.wrong_guesses();
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *guess_distribution.entry(guesses).or_insert(0) += 1;
                per_word.push((target.text().to_string(), guesses));
            }
            Ok(_) | Err(_) => failed += 1,
        }

        if idx % 50 == 0 && solved > 0 {
            let avg = total_guesses as f64 / solved as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    // Ten hardest words by guess count
    per_word.sort_by(|a, b| b.1.cmp(&a.1));
    per_word.truncate(10);

    TestAllStatistics {
        total_words: test_words.len(),
        solved,
        failed,
        guess_distribution,
        total_time: total_start.elapsed(),
        average_guesses: total_guesses as f64 / solved.max(1) as f64,
        average_wrong: total_wrong as f64 / solved.max(1) as f64,
        max_guesses,
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        worst_words: per_word,
    }
}

/// Print the statistics from a test-all run
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TEST RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Outcomes:".bright_cyan().bold());
    println!("   Words tested:     {}", stats.total_words);
    println!(
        "   Solved:           {}",
        stats.solved.to_string().green().bold()
    );
    println!(
        "   Failed:           {}",
        if stats.failed == 0 {
            stats.failed.to_string().green()
        } else {
            stats.failed.to_string().red()
        }
    );
    println!(
        "   Win rate:         {:.1}%",
        100.0 * stats.solved as f64 / stats.total_words.max(1) as f64
    );

    println!("\n{}", "Guesses per solved word:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.2}", stats.average_guesses).bright_yellow().bold()
    );
    println!("   Average wrong:    {:.2}", stats.average_wrong);
    println!("   Best case:        {}", stats.min_guesses);
    println!("   Worst case:       {}", stats.max_guesses);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if !stats.worst_words.is_empty() {
        println!("\n{}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &stats.worst_words {
            println!("   {word:<15} {guesses} guesses");
        }
    }
}
