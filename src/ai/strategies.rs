//! Easy, Medium, and Hard move selection
//!
//! Neighbor candidates are iterated in sorted order before any random
//! choice so the strategies are reproducible under a seeded generator.

use crate::core::Word;
use crate::graph::WordGraph;
use crate::search::{DistanceEstimator, PathFinder};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::cmp::Ordering;

/// Chance an Easy opponent ignores the target entirely
const EASY_RANDOM_CHANCE: f64 = 0.3;
/// Chance a Medium opponent takes the best-scored move
const MEDIUM_BEST_CHANCE: f64 = 0.7;
/// How many of the top-scored moves Medium may fall back to
const MEDIUM_TOP_POOL: usize = 3;
/// Weight of the second-level lookahead in Medium's score
const LOOKAHEAD_WEIGHT: f64 = 0.3;
/// Chance a Hard opponent tries to block the opponent's path
const HARD_BLOCK_CHANCE: f64 = 0.3;
/// Chance a Hard opponent feints off the optimal path
const HARD_FEINT_CHANCE: f64 = 0.2;

/// Easy: random 30% of the time, otherwise a non-worsening neighbor
///
/// The random branch may move away from the target. The biased branch
/// keeps neighbors whose estimated distance to the target does not exceed
/// the current word's, falling back to all neighbors when none qualify.
pub fn select_easy(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    current: &Word,
    target: &Word,
    rng: &mut impl Rng,
) -> Option<Word> {
    let neighbors = graph.sorted_neighbors(current);
    if neighbors.is_empty() {
        return None;
    }

    if rng.random_bool(EASY_RANDOM_CHANCE) {
        return neighbors.choose(rng).map(|&n| n.clone());
    }

    let current_distance = estimator.estimate(current, target);
    let closer: Vec<&Word> = neighbors
        .iter()
        .filter(|n| estimator.estimate(n, target) <= current_distance)
        .copied()
        .collect();

    let pool = if closer.is_empty() { &neighbors } else { &closer };
    pool.choose(rng).map(|&n| n.clone())
}

/// Medium: greedy two-step lookahead
///
/// Scores each neighbor as its estimated distance to the target plus a
/// weighted best second step; a neighbor with no onward moves scores
/// +infinity. Takes the best with probability 0.7, otherwise picks
/// uniformly among the top three.
pub fn select_medium(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    current: &Word,
    target: &Word,
    rng: &mut impl Rng,
) -> Option<Word> {
    let neighbors = graph.sorted_neighbors(current);
    if neighbors.is_empty() {
        return None;
    }

    let mut scored: Vec<(f64, Word)> = Vec::with_capacity(neighbors.len());
    for neighbor in neighbors {
        let lookahead = graph
            .neighbors(neighbor)
            .iter()
            .map(|nn| estimator.estimate(nn, target))
            .fold(f64::INFINITY, f64::min);
        let score = estimator.estimate(neighbor, target) + LOOKAHEAD_WEIGHT * lookahead;
        scored.push((score, neighbor.clone()));
    }

    scored.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(&b.1))
    });

    if rng.random_bool(MEDIUM_BEST_CHANCE) {
        return scored.first().map(|(_, word)| word.clone());
    }

    let pool = &scored[..scored.len().min(MEDIUM_TOP_POOL)];
    pool.choose(rng).map(|(_, word)| word.clone())
}

/// Hard: follow the optimal path, with blocking and feints mixed in
///
/// Falls back to Medium when no path exists or the path is trivially short.
/// With probability 0.3 first tries a blocking move: a neighbor of the
/// current word sitting on the opponent's own optimal path to the target
/// (excluding the opponent's current word and the target). Otherwise takes
/// the next optimal step, except that with probability 0.2 it substitutes
/// a different neighbor at most one worse than the current distance, for
/// unpredictability.
#[allow(clippy::too_many_arguments)]
pub fn select_hard(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    paths: &mut PathFinder,
    current: &Word,
    target: &Word,
    opponent_ladder: &[Word],
    rng: &mut impl Rng,
) -> Option<Word> {
    let Some(path) = paths.find_path(graph, estimator, current, target) else {
        return select_medium(graph, estimator, current, target, rng);
    };
    if path.len() <= 2 {
        return select_medium(graph, estimator, current, target, rng);
    }

    if rng.random_bool(HARD_BLOCK_CHANCE) {
        if let Some(block) =
            blocking_move(graph, estimator, paths, current, target, opponent_ladder)
        {
            return Some(block);
        }
    }

    let next = path[1].clone();

    if rng.random_bool(HARD_FEINT_CHANCE) {
        let current_distance = estimator.estimate(current, target);
        let alternatives: Vec<&Word> = graph
            .sorted_neighbors(current)
            .into_iter()
            .filter(|n| **n != next && estimator.estimate(n, target) <= current_distance + 1.0)
            .collect();
        if let Some(&alternative) = alternatives.choose(rng) {
            return Some(alternative.clone());
        }
    }

    Some(next)
}

/// A neighbor of `current` on the opponent's optimal path, if any
///
/// The opponent's current word and the target itself are excluded. The
/// first match in graph iteration order wins.
fn blocking_move(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    paths: &mut PathFinder,
    current: &Word,
    target: &Word,
    opponent_ladder: &[Word],
) -> Option<Word> {
    let opponent_current = opponent_ladder.last()?;
    let opponent_path = paths.find_path(graph, estimator, opponent_current, target)?;
    if opponent_path.len() <= 2 {
        return None;
    }

    let interior = &opponent_path[1..opponent_path.len() - 1];
    graph
        .neighbors(current)
        .iter()
        .find(|n| interior.contains(n))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn graph_of(words: &[&str]) -> WordGraph {
        let set: FxHashSet<Word> = words.iter().map(|w| Word::new(*w).unwrap()).collect();
        WordGraph::build(&set)
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn easy_only_returns_neighbors() {
        let graph = graph_of(&["cat", "cot", "cut", "cap", "dog", "dot"]);
        let mut estimator = DistanceEstimator::new();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = select_easy(&graph, &mut estimator, &w("cat"), &w("dog"), &mut rng);
            let chosen = chosen.unwrap();
            assert!(graph.are_neighbors(&w("cat"), &chosen));
        }
    }

    #[test]
    fn easy_isolated_word_returns_none() {
        let graph = graph_of(&["cat", "dog"]);
        let mut estimator = DistanceEstimator::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(select_easy(&graph, &mut estimator, &w("cat"), &w("dog"), &mut rng).is_none());
    }

    #[test]
    fn medium_prefers_progress() {
        // cot leads toward dog, cap leads away
        let graph = graph_of(&["cat", "cot", "cap", "cog", "dog"]);
        let mut estimator = DistanceEstimator::new();

        let mut toward = 0;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen =
                select_medium(&graph, &mut estimator, &w("cat"), &w("dog"), &mut rng).unwrap();
            if chosen == w("cot") {
                toward += 1;
            }
        }
        // Best move is taken at least 70% of the time in expectation
        assert!(toward > 25, "cot chosen only {toward}/50 times");
    }

    #[test]
    fn medium_only_returns_neighbors() {
        let graph = graph_of(&["cat", "cot", "cut", "cap", "dog", "dot", "cog"]);
        let mut estimator = DistanceEstimator::new();

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen =
                select_medium(&graph, &mut estimator, &w("cat"), &w("dog"), &mut rng).unwrap();
            assert!(graph.are_neighbors(&w("cat"), &chosen));
        }
    }

    #[test]
    fn hard_follows_or_feints_but_stays_adjacent() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot", "cut", "cap"]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = select_hard(
                &graph,
                &mut estimator,
                &mut paths,
                &w("cat"),
                &w("dog"),
                &[],
                &mut rng,
            )
            .unwrap();
            assert!(graph.are_neighbors(&w("cat"), &chosen));
        }
    }

    #[test]
    fn hard_falls_back_to_medium_when_adjacent_to_target() {
        let graph = graph_of(&["cog", "dog", "cot", "cat"]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();
        let mut rng = StdRng::seed_from_u64(3);

        // cog -> dog is one move; the trivially-short path defers to Medium
        let chosen = select_hard(
            &graph,
            &mut estimator,
            &mut paths,
            &w("cog"),
            &w("dog"),
            &[],
            &mut rng,
        )
        .unwrap();
        assert!(graph.are_neighbors(&w("cog"), &chosen));
    }

    #[test]
    fn blocking_move_lands_on_opponent_path_interior() {
        // Opponent at cat, heading for dog: optimal path cat-cot-{cog|dot}-dog.
        // Mover at cut; cut's neighbor cot is on the opponent's path interior.
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot", "cut"]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();

        let opponent_ladder = vec![w("cat")];
        let block = blocking_move(
            &graph,
            &mut estimator,
            &mut paths,
            &w("cut"),
            &w("dog"),
            &opponent_ladder,
        )
        .unwrap();

        let opponent_path = paths
            .find_path(&graph, &mut estimator, &w("cat"), &w("dog"))
            .unwrap();
        let interior = &opponent_path[1..opponent_path.len() - 1];
        assert!(interior.contains(&block));
        assert!(graph.are_neighbors(&w("cut"), &block));
    }

    #[test]
    fn blocking_requires_an_opponent_ladder() {
        let graph = graph_of(&["cat", "cot", "cog", "dog"]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();

        assert!(
            blocking_move(
                &graph,
                &mut estimator,
                &mut paths,
                &w("cot"),
                &w("dog"),
                &[],
            )
            .is_none()
        );
    }
}
