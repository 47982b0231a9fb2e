//! Engine facade
//!
//! An `Engine` owns one dictionary's graph and caches. Construction is the
//! explicit, fallible build step; queries against an engine are always
//! against a fully built graph. Multiple engines with different
//! dictionaries can coexist.

use crate::ai::{self, Difficulty};
use crate::core::Word;
use crate::core::distance::hamming;
use crate::dictionary::{self, DictionaryError};
use crate::graph::WordGraph;
use crate::search::{DistanceEstimator, PathFinder};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Attempt budget for random-pair sampling
const PAIR_ATTEMPTS: usize = 100;
/// Accepted optimal path lengths are strictly inside this range
const PAIR_MIN_LENGTH: usize = 2;
const PAIR_MAX_LENGTH: usize = 8;

/// A sampled start/end pair with its optimal ladder length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPair {
    pub start: Word,
    pub end: Word,
    pub optimal_length: usize,
}

/// Word-ladder engine: graph, heuristic cache, and path caches
///
/// Read-only after construction apart from monotonically growing caches;
/// cache-touching methods take `&mut self`.
pub struct Engine {
    graph: WordGraph,
    estimator: DistanceEstimator,
    paths: PathFinder,
}

impl Engine {
    /// Build an engine from raw dictionary lines
    ///
    /// # Errors
    /// Propagates `DictionaryError::NoValidWords` when non-blank input
    /// parses to nothing.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = dictionary::parse_lines(lines)?;
        Ok(Self::from_words(&words))
    }

    /// Build an engine from an already-parsed word set
    #[must_use]
    pub fn from_words(words: &FxHashSet<Word>) -> Self {
        Self {
            graph: WordGraph::build(words),
            estimator: DistanceEstimator::new(),
            paths: PathFinder::new(),
        }
    }

    /// Build an engine from a dictionary file
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` when the file cannot be read, or
    /// `DictionaryError::NoValidWords` when nothing in it parses.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let words = dictionary::load_from_file(path)?;
        Ok(Self::from_words(&words))
    }

    /// Build an engine over the embedded default dictionary
    ///
    /// # Errors
    /// Only fails if the embedded list is somehow empty; practically
    /// infallible.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_lines(dictionary::WORDS.iter().copied())
    }

    /// Access the underlying graph
    #[must_use]
    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    /// Whether the word is in the dictionary
    #[must_use]
    pub fn is_valid_word(&self, word: &Word) -> bool {
        self.graph.contains(word)
    }

    /// Whether two words differ in exactly one position
    #[must_use]
    pub fn are_neighbors(&self, a: &Word, b: &Word) -> bool {
        self.graph.are_neighbors(a, b)
    }

    /// Neighbors of a word in lexicographic order (empty if absent)
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<Word> {
        self.graph
            .sorted_neighbors(word)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Heuristic distance estimate between two equal-length words
    pub fn estimate_distance(&mut self, a: &Word, b: &Word) -> f64 {
        self.estimator.estimate(a, b)
    }

    /// Shortest path via heuristic-guided A*
    ///
    /// `None` when no path exists or the endpoint lengths differ.
    pub fn find_path(&mut self, start: &Word, end: &Word) -> Option<Vec<Word>> {
        self.paths
            .find_path(&self.graph, &mut self.estimator, start, end)
    }

    /// Shortest path via bidirectional BFS
    pub fn find_path_bidirectional(&mut self, start: &Word, end: &Word) -> Option<Vec<Word>> {
        self.paths.find_path_bidirectional(&self.graph, start, end)
    }

    /// Select the AI's next move
    ///
    /// `None` means the current word has no usable neighbor: the mover is
    /// stuck and the caller resolves the game.
    pub fn select_ai_move(
        &mut self,
        current: &Word,
        target: &Word,
        difficulty: Difficulty,
        opponent_ladder: &[Word],
    ) -> Option<Word> {
        self.select_ai_move_with_rng(current, target, difficulty, opponent_ladder, &mut rand::rng())
    }

    /// [`Engine::select_ai_move`] with an injected generator
    pub fn select_ai_move_with_rng(
        &mut self,
        current: &Word,
        target: &Word,
        difficulty: Difficulty,
        opponent_ladder: &[Word],
        rng: &mut impl Rng,
    ) -> Option<Word> {
        ai::select_move(
            &self.graph,
            &mut self.estimator,
            &mut self.paths,
            current,
            target,
            difficulty,
            opponent_ladder,
            rng,
        )
    }

    /// Best unused neighbor toward the target
    pub fn hint(&mut self, current: &Word, target: &Word, used: &FxHashSet<Word>) -> Option<Word> {
        ai::hint(&self.graph, &mut self.estimator, current, target, used)
    }

    /// Sample a start/end pair with an interesting optimal ladder
    ///
    /// Accepts pairs whose optimal path length is strictly between 2 and 8
    /// words. Gives up after 100 attempts; returns `None` immediately when
    /// fewer than two words of the length exist.
    pub fn generate_random_pair(&mut self, length: usize) -> Option<RandomPair> {
        self.generate_random_pair_with_rng(length, &mut rand::rng())
    }

    /// [`Engine::generate_random_pair`] with an injected generator
    pub fn generate_random_pair_with_rng(
        &mut self,
        length: usize,
        rng: &mut impl Rng,
    ) -> Option<RandomPair> {
        let bucket: Vec<Word> = self.graph.words_of_length(length).to_vec();
        if bucket.len() < 2 {
            return None;
        }

        for _ in 0..PAIR_ATTEMPTS {
            let sampled: Vec<&Word> = bucket.choose_multiple(rng, 2).collect();
            let [start, end] = sampled[..] else {
                continue;
            };
            let Some(path) = self.find_path_bidirectional(start, end) else {
                continue;
            };
            if path.len() > PAIR_MIN_LENGTH && path.len() < PAIR_MAX_LENGTH {
                return Some(RandomPair {
                    start: start.clone(),
                    end: end.clone(),
                    optimal_length: path.len(),
                });
            }
        }

        None
    }

    /// External-facing difficulty metric for a pair
    ///
    /// `path_length * 10 + hamming * 5 + (10 - average neighbor count along
    /// the path)`. `None` when the pair is unsolvable. Not used by the
    /// search itself.
    pub fn calculate_difficulty(&mut self, start: &Word, end: &Word) -> Option<f64> {
        let path = self.find_path_bidirectional(start, end)?;

        let neighbor_total: usize = path.iter().map(|w| self.graph.neighbors(w).len()).sum();
        let average_neighbors = neighbor_total as f64 / path.len() as f64;

        Some(path.len() as f64 * 10.0 + hamming(start, end) as f64 * 5.0 + (10.0 - average_neighbors))
    }
}
