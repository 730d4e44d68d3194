//! Interactive play command
//!
//! The user thinks of a word; the solver guesses against their answers.

use crate::dictionary::DictionaryIndex;
use crate::output::print_round_summary;
use crate::player::play_round;
use crate::session::InteractiveSession;
use crate::solver::StrategyKind;
use std::io::{self, Write};

/// Run interactive rounds until the user declines to continue
///
/// # Errors
///
/// Returns an error if reading user input fails or the solver runs out of
/// candidates for the announced length.
pub fn run_play(
    index: &DictionaryIndex,
    strategy: StrategyKind,
    lives: u32,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Hangman Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("\nI'll try to guess your word, one letter at a time.");
    println!("Answer honestly; I get {lives} wrong guesses before I hang.\n");

    loop {
        let mut session = InteractiveSession::with_lives(lives);
        let summary = play_round(&mut session, index, strategy)?;

        print_round_summary(&summary);

        match prompt("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => {}
            _ => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn prompt(question: &str) -> Result<String, String> {
    print!("{question}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
