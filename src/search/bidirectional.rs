//! Bidirectional breadth-first search
//!
//! Expands frontiers alternately from both endpoints, level by level. The
//! first node discovered by one frontier that the opposite frontier has
//! already visited is the meeting point; the path is stitched together by
//! walking parent links back to each endpoint. Guaranteed shortest on an
//! unweighted graph, and typically much faster than one-sided search on
//! large dictionaries.

use crate::core::Word;
use crate::graph::WordGraph;
use rustc_hash::{FxHashMap, FxHashSet};

/// Find a shortest path from `start` to `end`, or `None` when disconnected
pub fn search(graph: &WordGraph, start: &Word, end: &Word) -> Option<Vec<Word>> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }
    if start == end {
        return Some(vec![start.clone()]);
    }

    let mut forward = Side::new(start);
    let mut backward = Side::new(end);

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        if let Some(meet) = forward.expand(graph, &backward.visited) {
            return Some(stitch(&meet, &forward.parents, &backward.parents));
        }
        if let Some(meet) = backward.expand(graph, &forward.visited) {
            return Some(stitch(&meet, &forward.parents, &backward.parents));
        }
    }

    None
}

/// One direction of the search: current frontier, visited set, parent links
struct Side {
    frontier: Vec<Word>,
    visited: FxHashSet<Word>,
    parents: FxHashMap<Word, Word>,
}

impl Side {
    fn new(origin: &Word) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(origin.clone());
        Self {
            frontier: vec![origin.clone()],
            visited,
            parents: FxHashMap::default(),
        }
    }

    /// Advance one level; returns the meeting word if the frontiers touched
    fn expand(&mut self, graph: &WordGraph, other_visited: &FxHashSet<Word>) -> Option<Word> {
        let mut next = Vec::new();
        for node in &self.frontier {
            for neighbor in graph.neighbors(node) {
                if self.visited.contains(neighbor) {
                    continue;
                }
                self.visited.insert(neighbor.clone());
                self.parents.insert(neighbor.clone(), node.clone());
                if other_visited.contains(neighbor) {
                    return Some(neighbor.clone());
                }
                next.push(neighbor.clone());
            }
        }
        self.frontier = next;
        None
    }
}

/// Walk parent links from the meeting word out to both endpoints
fn stitch(
    meet: &Word,
    forward_parents: &FxHashMap<Word, Word>,
    backward_parents: &FxHashMap<Word, Word>,
) -> Vec<Word> {
    let mut path = vec![meet.clone()];

    let mut current = meet;
    while let Some(parent) = forward_parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();

    current = meet;
    while let Some(parent) = backward_parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }

    path
}
