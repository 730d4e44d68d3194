//! Hangman Solver
//!
//! An automated Hangman player. Candidate words are narrowed after every
//! guess outcome, and the next letter is chosen by how many remaining words
//! it appears in.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::dictionary::DictionaryIndex;
//! use hangman_solver::solver::{Engine, StrategyKind};
//!
//! let index = DictionaryIndex::embedded();
//! let engine = Engine::for_length(StrategyKind::from_name("cursor"), &index, 5);
//! let guess = engine.select_next_guess().unwrap();
//! println!("First guess: {guess}");
//! ```

// Core domain types
pub mod core;

// Word lists and the length index
pub mod dictionary;

// Candidate narrowing and letter selection
pub mod solver;

// Game session seam and referees
pub mod session;

// The round loop
pub mod player;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
