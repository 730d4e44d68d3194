//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, LetterRank, analyze_length};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use play::run_play;
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
