//! Heuristic-guided shortest-path search
//!
//! A* over the word graph with unit edge weights. Priority is accumulated
//! steps plus the composite heuristic estimate to the goal. Ties are broken
//! by insertion order: the frontier entry pushed first pops first among
//! equal priorities.

use super::heuristic::DistanceEstimator;
use crate::core::Word;
use crate::graph::WordGraph;
use float_ord::FloatOrd;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Find a path from `start` to `end`, or `None` when disconnected
///
/// Returns `[start]` when the endpoints coincide. Callers are expected to
/// have checked lengths and dictionary membership; absent endpoints simply
/// yield `None`.
pub fn search(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    start: &Word,
    end: &Word,
) -> Option<Vec<Word>> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }
    if start == end {
        return Some(vec![start.clone()]);
    }

    // Min-heap of (priority, insertion sequence, node)
    let mut open: BinaryHeap<Reverse<(FloatOrd<f64>, u64, Word)>> = BinaryHeap::new();
    let mut closed: FxHashSet<Word> = FxHashSet::default();
    let mut steps: FxHashMap<Word, usize> = FxHashMap::default();
    let mut came_from: FxHashMap<Word, Word> = FxHashMap::default();
    let mut sequence = 0u64;

    steps.insert(start.clone(), 0);
    open.push(Reverse((
        FloatOrd(estimator.estimate(start, end)),
        sequence,
        start.clone(),
    )));

    while let Some(Reverse((_, _, current))) = open.pop() {
        if &current == end {
            return Some(reconstruct(&came_from, &current));
        }
        if !closed.insert(current.clone()) {
            // Stale heap entry for an already-finalized node
            continue;
        }

        let Some(&current_steps) = steps.get(&current) else {
            continue;
        };

        for neighbor in graph.neighbors(&current) {
            if closed.contains(neighbor) {
                continue;
            }
            let tentative = current_steps + 1;
            if tentative < steps.get(neighbor).copied().unwrap_or(usize::MAX) {
                steps.insert(neighbor.clone(), tentative);
                came_from.insert(neighbor.clone(), current.clone());
                sequence += 1;
                let priority = tentative as f64 + estimator.estimate(neighbor, end);
                open.push(Reverse((FloatOrd(priority), sequence, neighbor.clone())));
            }
        }
    }

    None
}

fn reconstruct(came_from: &FxHashMap<Word, Word>, end: &Word) -> Vec<Word> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while let Some(previous) = came_from.get(current) {
        path.push(previous.clone());
        current = previous;
    }
    path.reverse();
    path
}
