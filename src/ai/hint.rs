//! Hint selection
//!
//! Suggests the unused neighbor closest to the target by heuristic
//! estimate.

use crate::core::Word;
use crate::graph::WordGraph;
use crate::search::DistanceEstimator;
use rustc_hash::FxHashSet;

/// Best unused neighbor of `current`, or `None` if every neighbor is used
///
/// Ties resolve to the lexicographically first neighbor.
pub fn hint(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    current: &Word,
    target: &Word,
    used: &FxHashSet<Word>,
) -> Option<Word> {
    let mut best: Option<(f64, Word)> = None;

    for neighbor in graph.sorted_neighbors(current) {
        if used.contains(neighbor) {
            continue;
        }
        let distance = estimator.estimate(neighbor, target);
        let improved = best.as_ref().is_none_or(|(best_distance, _)| distance < *best_distance);
        if improved {
            best = Some((distance, neighbor.clone()));
        }
    }

    best.map(|(_, word)| word)
}
