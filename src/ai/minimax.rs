//! Expert move selection: depth-limited minimax with alpha-beta pruning
//!
//! The mover maximizes, the opponent's hypothetical response minimizes.
//! Leaf positions are scored by closeness to the target (heuristic distance
//! and optimal path length), with a bonus for being ahead of the opponent
//! when a ladder is supplied. Pruning stops expanding siblings once
//! beta <= alpha; it changes search effort, never the returned score.

use crate::core::Word;
use crate::graph::WordGraph;
use crate::search::{DistanceEstimator, PathFinder};

/// Total plies searched, counting the root move
const SEARCH_DEPTH: u32 = 4;
const BASE_SCORE: f64 = 100.0;
const PATH_WEIGHT: f64 = 2.0;
const OPPONENT_WEIGHT: f64 = 10.0;

/// Pick the neighbor with the best minimax value
///
/// Returns `None` when `current` has no neighbors (the mover is stuck).
pub fn select_expert_move(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    paths: &mut PathFinder,
    current: &Word,
    target: &Word,
    opponent_ladder: &[Word],
) -> Option<Word> {
    let neighbors = graph.sorted_neighbors(current);
    if neighbors.is_empty() {
        return None;
    }

    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let mut best: Option<(f64, Word)> = None;

    for neighbor in neighbors {
        let value = minimax(
            graph,
            estimator,
            paths,
            neighbor,
            target,
            opponent_ladder,
            SEARCH_DEPTH - 1,
            alpha,
            beta,
            false,
        );
        let improved = best.as_ref().is_none_or(|(best_value, _)| value > *best_value);
        if improved {
            best = Some((value, neighbor.clone()));
        }
        alpha = alpha.max(value);
    }

    best.map(|(_, word)| word)
}

#[allow(clippy::too_many_arguments)]
fn minimax(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    paths: &mut PathFinder,
    word: &Word,
    target: &Word,
    opponent_ladder: &[Word],
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
) -> f64 {
    if depth == 0 || word == target {
        return evaluate(graph, estimator, paths, word, target, opponent_ladder);
    }

    let neighbors = graph.sorted_neighbors(word);
    if neighbors.is_empty() {
        // Being stuck is terminal and bad for whoever is stuck
        return if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    if maximizing {
        let mut value = f64::NEG_INFINITY;
        for neighbor in neighbors {
            value = value.max(minimax(
                graph,
                estimator,
                paths,
                neighbor,
                target,
                opponent_ladder,
                depth - 1,
                alpha,
                beta,
                false,
            ));
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        value
    } else {
        let mut value = f64::INFINITY;
        for neighbor in neighbors {
            value = value.min(minimax(
                graph,
                estimator,
                paths,
                neighbor,
                target,
                opponent_ladder,
                depth - 1,
                alpha,
                beta,
                true,
            ));
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        value
    }
}

/// Static evaluation of a position
///
/// `100 - distance - 2 * path_length`, plus `10 * (opponent_distance -
/// own_distance)` when the opponent's position is known. An unreachable
/// target evaluates to negative infinity.
fn evaluate(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    paths: &mut PathFinder,
    word: &Word,
    target: &Word,
    opponent_ladder: &[Word],
) -> f64 {
    let distance = estimator.estimate(word, target);
    let path_length = paths
        .find_path(graph, estimator, word, target)
        .map_or(f64::INFINITY, |path| path.len() as f64);

    let mut value = BASE_SCORE - distance - PATH_WEIGHT * path_length;

    if let Some(opponent) = opponent_ladder.last() {
        if opponent.len() == target.len() {
            value += OPPONENT_WEIGHT * (estimator.estimate(opponent, target) - distance);
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn graph_of(words: &[&str]) -> WordGraph {
        let set: FxHashSet<Word> = words.iter().map(|w| Word::new(*w).unwrap()).collect();
        WordGraph::build(&set)
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Same-depth minimax without pruning, for score cross-checks
    fn brute_force(
        graph: &WordGraph,
        estimator: &mut DistanceEstimator,
        paths: &mut PathFinder,
        word: &Word,
        target: &Word,
        depth: u32,
        maximizing: bool,
    ) -> f64 {
        if depth == 0 || word == target {
            return evaluate(graph, estimator, paths, word, target, &[]);
        }
        let neighbors = graph.sorted_neighbors(word);
        if neighbors.is_empty() {
            return if maximizing {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
        let values = neighbors.into_iter().map(|n| {
            brute_force(graph, estimator, paths, n, target, depth - 1, !maximizing)
        });
        if maximizing {
            values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.fold(f64::INFINITY, f64::min)
        }
    }

    #[test]
    fn expert_returns_a_neighbor() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot", "cut"]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();

        let chosen =
            select_expert_move(&graph, &mut estimator, &mut paths, &w("cat"), &w("dog"), &[])
                .unwrap();
        assert!(graph.are_neighbors(&w("cat"), &chosen));
    }

    #[test]
    fn expert_takes_the_winning_move() {
        let graph = graph_of(&["cog", "dog", "cot", "cat", "cut"]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();

        let chosen =
            select_expert_move(&graph, &mut estimator, &mut paths, &w("cog"), &w("dog"), &[])
                .unwrap();
        assert_eq!(chosen, w("dog"));
    }

    #[test]
    fn expert_stuck_returns_none() {
        let graph = graph_of(&["cat", "dog", "dot"]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();

        assert!(
            select_expert_move(&graph, &mut estimator, &mut paths, &w("cat"), &w("dog"), &[])
                .is_none()
        );
    }

    #[test]
    fn pruning_does_not_change_the_chosen_score() {
        let graph = graph_of(&[
            "cat", "cot", "cog", "dog", "dot", "cut", "cap", "cop", "dig", "fog",
        ]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();

        let chosen =
            select_expert_move(&graph, &mut estimator, &mut paths, &w("cat"), &w("dog"), &[])
                .unwrap();

        // Recompute every root move without pruning
        let best_value = graph
            .sorted_neighbors(&w("cat"))
            .into_iter()
            .map(|n| {
                brute_force(
                    &graph,
                    &mut estimator,
                    &mut paths,
                    n,
                    &w("dog"),
                    SEARCH_DEPTH - 1,
                    false,
                )
            })
            .fold(f64::NEG_INFINITY, f64::max);
        let chosen_value = brute_force(
            &graph,
            &mut estimator,
            &mut paths,
            &chosen,
            &w("dog"),
            SEARCH_DEPTH - 1,
            false,
        );

        assert!(
            (chosen_value - best_value).abs() < 1e-9,
            "pruned pick scores {chosen_value}, brute-force best is {best_value}"
        );
    }

    #[test]
    fn opponent_ladder_shifts_evaluation() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot"]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();

        let behind = evaluate(
            &graph,
            &mut estimator,
            &mut paths,
            &w("cat"),
            &w("dog"),
            &[w("cot")],
        );
        let ahead = evaluate(
            &graph,
            &mut estimator,
            &mut paths,
            &w("cot"),
            &w("dog"),
            &[w("cat")],
        );
        // Being closer than the opponent scores higher than the reverse
        assert!(ahead > behind);
    }

    #[test]
    fn unreachable_target_evaluates_to_negative_infinity() {
        let graph = graph_of(&["hot", "hop", "tip", "tap"]);
        let mut estimator = DistanceEstimator::new();
        let mut paths = PathFinder::new();

        let value = evaluate(
            &graph,
            &mut estimator,
            &mut paths,
            &w("hot"),
            &w("tap"),
            &[],
        );
        assert!(value.is_infinite() && value < 0.0);
    }
}
