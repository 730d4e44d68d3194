//! Display functions for command results

use super::formatters::{create_progress_bar, format_guess, outcome_symbol};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::player::RoundSummary;
use colored::Colorize;

/// Print the guess trail and outcome of one round
pub fn print_round_summary(summary: &RoundSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    for (i, record) in summary.guesses.iter().enumerate() {
        let mark = if record.was_correct {
            outcome_symbol(true).green()
        } else {
            outcome_symbol(false).red()
        };
        println!(
            "Turn {:>2}: {} {:<8} candidates {} → {}",
            i + 1,
            mark,
            format_guess(&record.guess),
            record.pool_before,
            record.pool_after
        );
    }

    println!();
    if summary.won {
        println!(
            "{}",
            format!("Won in {} guesses!", summary.num_guesses())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Lost after {} guesses", summary.num_guesses())
                .red()
                .bold()
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} lives)",
        result.target.to_uppercase().bright_yellow().bold(),
        result.lives
    );

    if verbose {
        for (i, record) in result.summary.guesses.iter().enumerate() {
            let mark = if record.was_correct {
                outcome_symbol(true).green()
            } else {
                outcome_symbol(false).red()
            };
            println!(
                "  Turn {:>2}: {} {:<8} candidates {} → {}",
                i + 1,
                mark,
                format_guess(&record.guess),
                record.pool_before,
                record.pool_after
            );
        }
    }

    println!();
    if result.summary.won {
        println!(
            "{}",
            format!(
                "Solved in {} guesses ({} wrong)",
                result.summary.num_guesses(),
                result.summary.wrong_guesses()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed after {} guesses", result.summary.num_guesses())
                .red()
                .bold()
        );
    }
}

/// Print the initial letter ranking for a word length
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} length {} ({} candidate words) ",
        "LETTER RANKING:".bright_cyan().bold(),
        result.length.to_string().bright_yellow().bold(),
        result.pool_size
    );
    println!("{}", "═".repeat(60).cyan());

    let max = result
        .ranking
        .first()
        .map_or(1, |r| r.word_count)
        .max(1) as f64;

    println!("\n   letter   words   occurrences");
    for rank in &result.ranking {
        let bar = create_progress_bar(rank.word_count as f64, max, 24);
        println!(
            "   {}        {:>5}   {:>5}   {}",
            rank.letter.to_string().bright_yellow(),
            rank.word_count,
            rank.occurrence_count,
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Wins:             {}",
        result.wins.to_string().green().bold()
    );
    println!(
        "   Losses:           {}",
        if result.losses == 0 {
            result.losses.to_string().green()
        } else {
            result.losses.to_string().red()
        }
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Average wrong:    {:.2}", result.average_wrong);
    println!("   Best case:        {}", result.min_guesses);
    println!("   Worst case:       {}", result.max_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if !result.distribution.is_empty() {
        println!("\n{}", "Guess distribution:".bright_cyan().bold());
        let mut counts: Vec<_> = result.distribution.iter().collect();
        counts.sort_by_key(|(guesses, _)| **guesses);
        let max = counts.iter().map(|(_, c)| **c).max().unwrap_or(1) as f64;

        for (guesses, count) in counts {
            let bar = create_progress_bar(*count as f64, max, 30);
            println!("   {guesses:>3}: {} {count}", bar.cyan());
        }
    }
}
