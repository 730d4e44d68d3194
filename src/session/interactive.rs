//! Human-refereed session
//!
//! The user thinks of a word and answers the solver's questions over stdin,
//! playing the server role. Loss is declared when the wrong-guess allowance
//! runs out, same as the local referee.

use super::{GameSession, GuessReply, LOSS_MARKER, RoundStart};
use crate::core::Guess;
use crate::session::local::DEFAULT_LIVES;
use std::io::{self, Write};

/// A session where a human answers for their own secret word
pub struct InteractiveSession {
    lives: u32,
    lives_left: u32,
    ended: bool,
    token_counter: u64,
}

impl InteractiveSession {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_lives(DEFAULT_LIVES)
    }

    #[must_use]
    pub const fn with_lives(lives: u32) -> Self {
        Self {
            lives,
            lives_left: lives,
            ended: false,
            token_counter: 0,
        }
    }

    fn next_token(&mut self) -> String {
        self.token_counter += 1;
        format!("token-{}", self.token_counter)
    }
}

impl Default for InteractiveSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession for InteractiveSession {
    fn start_round(&mut self) -> io::Result<RoundStart> {
        self.lives_left = self.lives;
        self.ended = false;

        println!("\nThink of a word and keep it to yourself.");
        let target_length = loop {
            let answer = prompt("How many letters does it have?")?;
            match answer.parse::<usize>() {
                Ok(n) if n > 0 => break n,
                _ => println!("Please enter a positive number."),
            }
        };

        Ok(RoundStart {
            target_length,
            token: self.next_token(),
            game_ended: false,
            error: None,
        })
    }

    fn guess(&mut self, _token: &str, guess: &Guess) -> io::Result<GuessReply> {
        let question = match guess {
            Guess::Letter(l) => format!("Is the letter '{}' in your word?", *l as char),
            Guess::Word(w) => format!("Is your word \"{w}\"?"),
        };
        let was_correct = prompt_yes_no(&question)?;

        let mut error = None;
        if was_correct {
            let solved = match guess {
                // A confirmed full word ends the round outright
                Guess::Word(_) => true,
                Guess::Letter(_) => prompt_yes_no("Is the whole word revealed now?")?,
            };
            if solved {
                self.ended = true;
            }
        } else {
            self.lives_left = self.lives_left.saturating_sub(1);
            if self.lives_left == 0 {
                self.ended = true;
                error = Some(format!("Game over. {LOSS_MARKER}"));
            }
        }

        Ok(GuessReply {
            token: self.next_token(),
            was_correct,
            game_ended: self.ended,
            error,
        })
    }
}

/// Get user input with a prompt
fn prompt(question: &str) -> io::Result<String> {
    print!("{question} ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

fn prompt_yes_no(question: &str) -> io::Result<bool> {
    loop {
        let answer = prompt(&format!("{question} [y/n]"))?.to_lowercase();
        match answer.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}
