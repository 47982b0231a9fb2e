//! Dictionary adjacency graph
//!
//! Two words are neighbors iff they have the same length and differ in
//! exactly one character position. Adjacency is discovered with wildcard
//! bucketing: every word contributes one key per position (that position
//! blanked), and words sharing a key form a clique. This costs
//! O(total letters x bucket size) edge insertions instead of O(n^2)
//! pairwise comparisons.

use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Immutable adjacency relation over a dictionary
///
/// Built once from a word set; never mutated afterwards. Edges are
/// symmetric by construction.
pub struct WordGraph {
    adjacency: FxHashMap<Word, FxHashSet<Word>>,
    by_length: FxHashMap<usize, Vec<Word>>,
    empty: FxHashSet<Word>,
}

impl WordGraph {
    /// Build the graph from a deduplicated word set
    ///
    /// Length buckets are processed in parallel; their adjacency maps are
    /// disjoint (edges never cross lengths) so merging is a plain extend.
    #[must_use]
    pub fn build(words: &FxHashSet<Word>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        for word in words {
            by_length.entry(word.len()).or_default().push(word.clone());
        }
        // Sorted buckets give deterministic sampling and iteration
        for bucket in by_length.values_mut() {
            bucket.sort();
        }

        let buckets: Vec<&Vec<Word>> = by_length.values().collect();
        let partials: Vec<FxHashMap<Word, FxHashSet<Word>>> = buckets
            .par_iter()
            .map(|bucket| bucket_adjacency(bucket))
            .collect();

        // Every word gets an entry, so isolated words query as empty rather
        // than absent
        let mut adjacency: FxHashMap<Word, FxHashSet<Word>> = FxHashMap::default();
        for word in words {
            adjacency.insert(word.clone(), FxHashSet::default());
        }
        for partial in partials {
            for (word, neighbors) in partial {
                adjacency.entry(word).or_default().extend(neighbors);
            }
        }

        Self {
            adjacency,
            by_length,
            empty: FxHashSet::default(),
        }
    }

    /// Whether the word is in the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Neighbors of a word (empty set if the word is absent)
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> &FxHashSet<Word> {
        self.adjacency.get(word).unwrap_or(&self.empty)
    }

    /// Neighbors in deterministic (lexicographic) order
    #[must_use]
    pub fn sorted_neighbors(&self, word: &Word) -> Vec<&Word> {
        let mut neighbors: Vec<&Word> = self.neighbors(word).iter().collect();
        neighbors.sort();
        neighbors
    }

    /// Whether two words are connected by an edge
    #[must_use]
    pub fn are_neighbors(&self, a: &Word, b: &Word) -> bool {
        self.neighbors(a).contains(b)
    }

    /// All words of a given length, sorted (empty slice if none)
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Word lengths present in the dictionary, sorted
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

/// Adjacency for one same-length bucket via wildcard keys
///
/// Words sharing a wildcard key differ in at most the blanked position,
/// hence exactly one (duplicates were removed by set semantics upstream).
fn bucket_adjacency(bucket: &[Word]) -> FxHashMap<Word, FxHashSet<Word>> {
    let mut groups: FxHashMap<Vec<u8>, Vec<&Word>> = FxHashMap::default();
    for word in bucket {
        for position in 0..word.len() {
            let mut key = word.bytes().to_vec();
            key[position] = b'*';
            groups.entry(key).or_default().push(word);
        }
    }

    let mut adjacency: FxHashMap<Word, FxHashSet<Word>> = FxHashMap::default();
    for group in groups.values() {
        for (i, &a) in group.iter().enumerate() {
            for &b in &group[i + 1..] {
                adjacency.entry(a.clone()).or_default().insert(b.clone());
                adjacency.entry(b.clone()).or_default().insert(a.clone());
            }
        }
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance::hamming;

    fn graph_of(words: &[&str]) -> WordGraph {
        let set: FxHashSet<Word> = words.iter().map(|w| Word::new(*w).unwrap()).collect();
        WordGraph::build(&set)
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn one_letter_difference_makes_neighbors() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot"]);

        assert!(graph.are_neighbors(&w("cat"), &w("cot")));
        assert!(graph.are_neighbors(&w("cot"), &w("cog")));
        assert!(graph.are_neighbors(&w("cog"), &w("dog")));
        assert!(graph.are_neighbors(&w("dot"), &w("dog")));
        assert!(graph.are_neighbors(&w("cot"), &w("dot")));
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = graph_of(&["cat", "cot", "cog", "dog", "dot"]);

        for a in ["cat", "cot", "cog", "dog", "dot"] {
            for b in ["cat", "cot", "cog", "dog", "dot"] {
                assert_eq!(
                    graph.are_neighbors(&w(a), &w(b)),
                    graph.are_neighbors(&w(b), &w(a)),
                    "asymmetry between {a} and {b}"
                );
            }
        }
    }

    #[test]
    fn edges_match_hamming_distance_one() {
        let words = ["cat", "cot", "cog", "dog", "dot", "dig", "fog"];
        let graph = graph_of(&words);

        for a in words {
            for b in words {
                if a == b {
                    continue;
                }
                let expected = hamming(&w(a), &w(b)) == 1;
                assert_eq!(
                    graph.are_neighbors(&w(a), &w(b)),
                    expected,
                    "edge ({a},{b}) should be {expected}"
                );
            }
        }
    }

    #[test]
    fn different_lengths_never_connect() {
        let graph = graph_of(&["cat", "cats", "oat", "oats"]);

        assert!(!graph.are_neighbors(&w("cat"), &w("cats")));
        assert!(graph.are_neighbors(&w("cat"), &w("oat")));
        assert!(graph.are_neighbors(&w("cats"), &w("oats")));
    }

    #[test]
    fn no_self_edges() {
        let graph = graph_of(&["cat", "cot"]);
        assert!(!graph.are_neighbors(&w("cat"), &w("cat")));
    }

    #[test]
    fn absent_word_has_empty_neighbors() {
        let graph = graph_of(&["cat", "cot"]);

        assert!(!graph.contains(&w("dog")));
        assert!(graph.neighbors(&w("dog")).is_empty());
        assert!(!graph.are_neighbors(&w("dog"), &w("cat")));
    }

    #[test]
    fn isolated_word_present_with_no_neighbors() {
        let graph = graph_of(&["cat", "xyz"]);

        assert!(graph.contains(&w("xyz")));
        assert!(graph.neighbors(&w("xyz")).is_empty());
    }

    #[test]
    fn words_of_length_sorted_and_complete() {
        let graph = graph_of(&["dog", "cat", "bird", "ant"]);

        let threes = graph.words_of_length(3);
        assert_eq!(threes, &[w("ant"), w("cat"), w("dog")]);
        assert_eq!(graph.words_of_length(4), &[w("bird")]);
        assert!(graph.words_of_length(7).is_empty());
    }

    #[test]
    fn sorted_neighbors_deterministic() {
        let graph = graph_of(&["cot", "cat", "cut", "cog"]);
        let neighbors = graph.sorted_neighbors(&w("cot"));
        let texts: Vec<&str> = neighbors.iter().map(|n| n.text()).collect();
        assert_eq!(texts, vec!["cat", "cog", "cut"]);
    }

    #[test]
    fn lengths_reported_sorted() {
        let graph = graph_of(&["bird", "cat", "crane"]);
        assert_eq!(graph.lengths(), vec![3, 4, 5]);
        assert_eq!(graph.word_count(), 3);
    }

    #[test]
    fn empty_dictionary_builds_empty_graph() {
        let graph = WordGraph::build(&FxHashSet::default());
        assert_eq!(graph.word_count(), 0);
        assert!(graph.lengths().is_empty());
    }
}
