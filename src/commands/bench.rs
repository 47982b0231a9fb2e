//! Pathfinding benchmark command
//!
//! Samples random pairs, solves each with both algorithms, and reports
//! throughput plus the optimal-length distribution.

use crate::engine::Engine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchConfig {
    pub length: usize,
    pub count: usize,
}

/// Result of a benchmark run
pub struct BenchResult {
    pub requested: usize,
    pub solved: usize,
    pub average_length: f64,
    pub length_distribution: HashMap<usize, usize>,
    /// Pairs where A* and bidirectional BFS disagreed on path length
    pub disagreements: usize,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Generate and solve `count` random pairs of the given word length
pub fn run_bench(engine: &mut Engine, config: &BenchConfig, rng: &mut impl Rng) -> BenchResult {
    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut solved = 0;
    let mut total_length = 0;
    let mut length_distribution: HashMap<usize, usize> = HashMap::new();
    let mut disagreements = 0;

    let start = Instant::now();

    for _ in 0..config.count {
        if let Some(pair) = engine.generate_random_pair_with_rng(config.length, rng) {
            solved += 1;
            total_length += pair.optimal_length;
            *length_distribution.entry(pair.optimal_length).or_insert(0) += 1;

            let astar_length = engine
                .find_path(&pair.start, &pair.end)
                .map_or(0, |path| path.len());
            if astar_length != pair.optimal_length {
                disagreements += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    BenchResult {
        requested: config.count,
        solved,
        average_length: if solved == 0 {
            0.0
        } else {
            total_length as f64 / solved as f64
        },
        length_distribution,
        disagreements,
        duration,
        pairs_per_second: config.count as f64 / duration.as_secs_f64(),
    }
}
