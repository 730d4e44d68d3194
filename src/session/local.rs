//! In-process Hangman referee
//!
//! Holds a secret word and a wrong-guess allowance, and answers guesses the
//! way a game server would. Used by the solve/benchmark/test-all commands and
//! throughout the tests.

use super::{GameSession, GuessReply, LOSS_MARKER, RoundStart};
use crate::core::{Guess, LetterSet, Word};
use std::io;

/// Wrong guesses allowed before the round is lost
pub const DEFAULT_LIVES: u32 = 9;

/// A simulated game server with a known secret word
#[derive(Debug, Clone)]
pub struct LocalSession {
    secret: Word,
    lives: u32,
    lives_left: u32,
    found: LetterSet,
    ended: bool,
    won: bool,
    token_counter: u64,
}

impl LocalSession {
    /// Create a session with the default wrong-guess allowance
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::with_lives(secret, DEFAULT_LIVES)
    }

    /// Create a session allowing `lives` wrong guesses
    #[must_use]
    pub const fn with_lives(secret: Word, lives: u32) -> Self {
        Self {
            secret,
            lives,
            lives_left: lives,
            found: LetterSet::EMPTY,
            ended: false,
            won: false,
            token_counter: 0,
        }
    }

    /// The secret word being refereed
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Wrong guesses still allowed
    #[must_use]
    pub const fn lives_left(&self) -> u32 {
        self.lives_left
    }

    /// Whether the round ended in a win
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    fn next_token(&mut self) -> String {
        self.token_counter += 1;
        format!("token-{}", self.token_counter)
    }

    fn record_wrong_guess(&mut self) -> Option<String> {
        // A zero-lives session loses on the first wrong guess
        self.lives_left = self.lives_left.saturating_sub(1);
        if self.lives_left == 0 {
            self.ended = true;
            return Some(format!(
                "Game over. {LOSS_MARKER} The word was '{}'.",
                self.secret
            ));
        }
        None
    }
}

impl GameSession for LocalSession {
    fn start_round(&mut self) -> io::Result<RoundStart> {
        self.lives_left = self.lives;
        self.found = LetterSet::EMPTY;
        self.ended = false;
        self.won = false;

        Ok(RoundStart {
            target_length: self.secret.len(),
            token: self.next_token(),
            game_ended: false,
            error: None,
        })
    }

    fn guess(&mut self, _token: &str, guess: &Guess) -> io::Result<GuessReply> {
        if self.ended {
            return Ok(GuessReply {
                token: self.next_token(),
                was_correct: false,
                game_ended: true,
                error: Some("Round already over".to_string()),
            });
        }

        let mut error = None;
        let was_correct = match guess {
            Guess::Letter(letter) => {
                if self.secret.has_letter(*letter) {
                    self.found.insert(*letter);
                    if self.found == self.secret.letters() {
                        self.ended = true;
                        self.won = true;
                    }
                    true
                } else {
                    error = self.record_wrong_guess();
                    false
                }
            }
            Guess::Word(word) => {
                if word == &self.secret {
                    self.ended = true;
                    self.won = true;
                    true
                } else {
                    error = self.record_wrong_guess();
                    false
                }
            }
        };

        Ok(GuessReply {
            token: self.next_token(),
            was_correct,
            game_ended: self.ended,
            error,
        })
    }
}
