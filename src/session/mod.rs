//! Game session seam
//!
//! The solver talks to whatever referees a round through the `GameSession`
//! trait: an in-process referee for solving and benchmarking, a human on
//! stdin for interactive play, or (elsewhere) a remote server client.

pub mod interactive;
pub mod local;

pub use interactive::InteractiveSession;
pub use local::LocalSession;

use crate::core::Guess;
use std::io;

/// Marker phrase embedded in the error message of a lost round
///
/// Matching on the message text is part of the session wire contract; any
/// other error is non-terminal and the round continues.
pub const LOSS_MARKER: &str = "Sorry, you lost!";

/// Opaque per-round token; may be renewed on every reply
pub type SessionToken = String;

/// Reply to starting a round
#[derive(Debug, Clone)]
pub struct RoundStart {
    /// Number of character slots in the secret word
    pub target_length: usize,
    pub token: SessionToken,
    pub game_ended: bool,
    pub error: Option<String>,
}

/// Reply to a submitted guess
#[derive(Debug, Clone)]
pub struct GuessReply {
    /// Possibly renewed token for the next guess
    pub token: SessionToken,
    /// Whether the guessed letter/word is present
    pub was_correct: bool,
    /// Whether the round is over, win or loss
    pub game_ended: bool,
    pub error: Option<String>,
}

/// A referee for one round of Hangman
///
/// Strictly sequential: every guess must be answered before the next one is
/// chosen.
pub trait GameSession {
    /// Begin a round
    ///
    /// # Errors
    /// Returns an I/O error if the session transport fails.
    fn start_round(&mut self) -> io::Result<RoundStart>;

    /// Submit a guess for the current round
    ///
    /// # Errors
    /// Returns an I/O error if the session transport fails.
    fn guess(&mut self, token: &str, guess: &Guess) -> io::Result<GuessReply>;
}

/// Whether a reply error marks a lost round
#[must_use]
pub fn is_loss(error: Option<&str>) -> bool {
    error.is_some_and(|e| e.contains(LOSS_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_marker_detected_inside_larger_message() {
        assert!(is_loss(Some("Game over. Sorry, you lost! The word was 'cat'.")));
    }

    #[test]
    fn other_errors_are_not_losses() {
        assert!(!is_loss(Some("malformed guess")));
        assert!(!is_loss(None));
    }
}
