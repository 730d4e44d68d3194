//! Hangman Solver - CLI
//!
//! Automated Hangman player with interactive, solve, and benchmark modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        SolveConfig, analyze_length, print_test_all_statistics, run_benchmark, run_play,
        run_test_all, sample_targets, solve_word,
    },
    dictionary::{DictionaryIndex, loader::load_from_file},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    session::local::DEFAULT_LIVES,
    solver::StrategyKind,
};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Automated Hangman player using letter-frequency candidate narrowing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: cursor (default) or greedy
    #[arg(short, long, global = true, default_value = "cursor")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed per round
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_LIVES)]
    lives: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): think of a word, the solver guesses it
    Play,

    /// Solve a specific target word against the built-in referee
    Solve {
        /// The target word to solve
        word: String,

        /// Show the full guess trail with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the initial letter ranking for a word length
    Analyze {
        /// Word length to analyze
        length: usize,
    },

    /// Benchmark solver performance on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test the solver on every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short = 'L', long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<DictionaryIndex> {
    match wordlist_mode {
        "embedded" => Ok(DictionaryIndex::embedded()),
        path => {
            let words = load_from_file(path)?;
            Ok(DictionaryIndex::new(words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let index = load_dictionary(&cli.wordlist)?;
    let strategy = StrategyKind::from_name(&cli.strategy);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(&index, strategy, cli.lives).map_err(|e| anyhow::anyhow!(e))?;
        }
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word, cli.lives);
            let result =
                solve_word(&config, &index, strategy).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { length } => {
            let result = analyze_length(length, &index).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count } => {
            println!(
                "Running benchmark on {count} random words ({} strategy)...",
                strategy.name()
            );
            let targets = sample_targets(&index, count);
            let result = run_benchmark(&index, strategy, &targets, cli.lives);
            print_benchmark_result(&result);
        }
        Commands::TestAll { limit } => {
            println!(
                "\nComprehensive test: {} strategy, {} lives",
                strategy.name(),
                cli.lives
            );
            let stats = run_test_all(&index, strategy, limit, cli.lives);
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
