//! Composite distance heuristic
//!
//! Blends Hamming distance, edit distance, and letter-frequency difference
//! into a single estimate used to guide search and rank candidate moves.
//! Deliberately not admissible: the edit-distance and frequency components
//! can overestimate on a graph where true cost is governed by Hamming
//! distance alone. Kept as-is for behavioral fidelity; the bidirectional
//! search is the guaranteed-shortest algorithm.

use crate::core::Word;
use crate::core::distance::{char_freq_diff, hamming, levenshtein};
use rustc_hash::FxHashMap;

const HAMMING_WEIGHT: f64 = 0.6;
const LEVENSHTEIN_WEIGHT: f64 = 0.3;
const CHAR_FREQ_WEIGHT: f64 = 0.1;

/// Memoizing estimator of distance between equal-length words
///
/// The cache key is the lexicographically normalized pair, so the estimate
/// is symmetric with one entry per unordered pair. Entries are never
/// invalidated: the dictionary is immutable after load.
#[derive(Default)]
pub struct DistanceEstimator {
    cache: FxHashMap<(Word, Word), f64>,
}

impl DistanceEstimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate the transformation distance between two equal-length words
    ///
    /// `0.6 * hamming + 0.3 * levenshtein + 0.1 * char_freq_diff`.
    /// Defined only for equal lengths; the mismatch case is a caller bug
    /// caught in debug builds.
    pub fn estimate(&mut self, a: &Word, b: &Word) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "estimate requires equal-length words");

        let key = if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };

        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }

        let estimate = HAMMING_WEIGHT * hamming(a, b) as f64
            + LEVENSHTEIN_WEIGHT * levenshtein(a, b) as f64
            + CHAR_FREQ_WEIGHT * char_freq_diff(a, b) as f64;

        self.cache.insert(key, estimate);
        estimate
    }

    /// Number of cached unordered pairs
    #[must_use]
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }
}
