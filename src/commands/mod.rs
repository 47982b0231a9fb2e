//! Command implementations

pub mod bench;
pub mod duel;

pub use bench::{BenchConfig, BenchResult, run_bench};
pub use duel::{DuelConfig, DuelOutcome, DuelResult, run_duel};
