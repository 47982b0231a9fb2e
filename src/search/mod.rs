//! Shortest-path search over the word graph
//!
//! Two interchangeable algorithms behind one memoizing facade: heuristic-
//! guided A* and bidirectional breadth-first search. Results, including
//! negative ones, are cached per ordered endpoint pair for the life of the
//! dictionary.

pub mod astar;
pub mod bidirectional;
pub mod heuristic;

pub use heuristic::DistanceEstimator;

use crate::core::Word;
use crate::graph::WordGraph;
use rustc_hash::FxHashMap;

/// A cached search result: `Some(path)` or a remembered "no path"
type CachedPath = Option<Vec<Word>>;

/// Memoizing path finder
///
/// Holds one cache per algorithm, keyed by the ordered `(start, end)` pair.
/// A cache entry of `None` means "searched, no path exists" and is distinct
/// from an absent entry ("not yet computed"). Caches grow monotonically and
/// are never invalidated.
///
/// Length-mismatched endpoints are reported as no-path rather than an
/// error: pathfinding stays total and composable.
#[derive(Default)]
pub struct PathFinder {
    astar_cache: FxHashMap<(Word, Word), CachedPath>,
    bidirectional_cache: FxHashMap<(Word, Word), CachedPath>,
}

impl PathFinder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest path via A* with the composite heuristic
    ///
    /// Returns `[start]` when `start == end`, `None` when no path exists or
    /// the endpoint lengths differ.
    pub fn find_path(
        &mut self,
        graph: &WordGraph,
        estimator: &mut DistanceEstimator,
        start: &Word,
        end: &Word,
    ) -> Option<Vec<Word>> {
        if start.len() != end.len() {
            return None;
        }
        let key = (start.clone(), end.clone());
        if let Some(cached) = self.astar_cache.get(&key) {
            return cached.clone();
        }
        let result = astar::search(graph, estimator, start, end);
        self.astar_cache.insert(key, result.clone());
        result
    }

    /// Shortest path via bidirectional BFS
    ///
    /// Same contract as [`PathFinder::find_path`]; always returns a
    /// minimum-length path when one exists.
    pub fn find_path_bidirectional(
        &mut self,
        graph: &WordGraph,
        start: &Word,
        end: &Word,
    ) -> Option<Vec<Word>> {
        if start.len() != end.len() {
            return None;
        }
        let key = (start.clone(), end.clone());
        if let Some(cached) = self.bidirectional_cache.get(&key) {
            return cached.clone();
        }
        let result = bidirectional::search(graph, start, end);
        self.bidirectional_cache.insert(key, result.clone());
        result
    }

    /// Number of cached A* results (including cached no-paths)
    #[must_use]
    pub fn cached_astar_results(&self) -> usize {
        self.astar_cache.len()
    }

    /// Number of cached bidirectional results (including cached no-paths)
    #[must_use]
    pub fn cached_bidirectional_results(&self) -> usize {
        self.bidirectional_cache.len()
    }
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

    #[test]
    fn repeated_calls_return_identical_paths() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot"]);
        let mut estimator = DistanceEstimator::new();
        let mut finder = PathFinder::new();

        let first = finder.find_path(&graph, &mut estimator, &w("cat"), &w("dog"));
        let second = finder.find_path(&graph, &mut estimator, &w("cat"), &w("dog"));
        assert_eq!(first, second);

        let first = finder.find_path_bidirectional(&graph, &w("cat"), &w("dog"));
        let second = finder.find_path_bidirectional(&graph, &w("cat"), &w("dog"));
        assert_eq!(first, second);
    }

    #[test]
    fn no_path_is_cached_not_recomputed_forever() {
        let graph = graph_of(&["hot", "hop", "tip", "tap"]);
        let mut estimator = DistanceEstimator::new();
        let mut finder = PathFinder::new();

        assert!(
            finder
                .find_path(&graph, &mut estimator, &w("hot"), &w("tap"))
                .is_none()
        );
        // The negative result occupies a cache slot
        assert_eq!(finder.cached_astar_results(), 1);
        assert!(
            finder
                .find_path(&graph, &mut estimator, &w("hot"), &w("tap"))
                .is_none()
        );
        assert_eq!(finder.cached_astar_results(), 1);
    }

    #[test]
    fn length_mismatch_is_no_path() {
        let graph = graph_of(&["cat", "cats"]);
        let mut estimator = DistanceEstimator::new();
        let mut finder = PathFinder::new();

        assert!(
            finder
                .find_path(&graph, &mut estimator, &w("cat"), &w("cats"))
                .is_none()
        );
        assert!(
            finder
                .find_path_bidirectional(&graph, &w("cat"), &w("cats"))
                .is_none()
        );
        // Mismatch short-circuits before the cache
        assert_eq!(finder.cached_astar_results(), 0);
    }

    #[test]
    fn algorithms_agree_on_length_for_solvable_pairs() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot", "dig", "fog", "fig"]);
        let mut estimator = DistanceEstimator::new();
        let mut finder = PathFinder::new();

        let astar = finder
            .find_path(&graph, &mut estimator, &w("cat"), &w("fig"))
            .unwrap();
        let bidi = finder
            .find_path_bidirectional(&graph, &w("cat"), &w("fig"))
            .unwrap();
        assert_eq!(astar.len(), bidi.len());
    }

    #[test]
    fn caches_are_per_ordered_pair() {
        let graph = graph_of(&["cat", "cot"]);
        let mut estimator = DistanceEstimator::new();
        let mut finder = PathFinder::new();

        finder.find_path(&graph, &mut estimator, &w("cat"), &w("cot"));
        finder.find_path(&graph, &mut estimator, &w("cot"), &w("cat"));
        assert_eq!(finder.cached_astar_results(), 2);
    }
}
