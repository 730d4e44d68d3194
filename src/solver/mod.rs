//! Candidate-narrowing heuristics
//!
//! This module contains the letter-frequency ranking, the pool-filtering
//! strategy variants, and the per-round engine that ties them together.

mod engine;
pub mod ranking;
pub mod strategy;

pub use engine::{Engine, EngineError};
pub use ranking::{LetterCounts, rank_letters};
pub use strategy::{CursorAdvance, GreedyReset, Strategy, StrategyKind};
