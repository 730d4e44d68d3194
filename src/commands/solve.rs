//! Word solving command
//!
//! Plays one round against an in-process referee holding the given secret
//! and returns the guess trail.

use crate::core::Word;
use crate::dictionary::DictionaryIndex;
use crate::player::{RoundSummary, play_round};
use crate::session::LocalSession;
use crate::solver::StrategyKind;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub lives: u32,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, lives: u32) -> Self {
        Self { target, lives }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub summary: RoundSummary,
    pub lives: u32,
}

/// Solve a specific word using the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or not ASCII letters)
/// - The candidate pool collapses mid-round (target not in the dictionary)
pub fn solve_word(
    config: &SolveConfig,
    index: &DictionaryIndex,
    strategy: StrategyKind,
) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut session = LocalSession::with_lives(target, config.lives);
    let summary = play_round(&mut session, index, strategy)?;

    Ok(SolveResult {
        target: config.target.clone(),
        summary,
        lives: config.lives,
    })
}
