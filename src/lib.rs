//! Ladder Engine
//!
//! A word-ladder pathfinding engine with adversarial AI opponents. Builds
//! an adjacency graph over a dictionary (words of equal length connected
//! iff they differ in exactly one position), finds shortest transformation
//! paths with A* or bidirectional BFS, and selects AI moves from
//! biased-random play up to depth-limited minimax with alpha-beta pruning.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ladder_engine::core::Word;
//! use ladder_engine::engine::Engine;
//!
//! let mut engine = Engine::embedded().unwrap();
//!
//! let start = Word::new("cat").unwrap();
//! let end = Word::new("dog").unwrap();
//! if let Some(path) = engine.find_path(&start, &end) {
//!     println!("{} moves", path.len() - 1);
//! }
//! ```

// Core domain types
pub mod core;

// Dictionary adjacency graph
pub mod graph;

// Shortest-path search and heuristics
pub mod search;

// AI move selection
pub mod ai;

// Dictionary loading
pub mod dictionary;

// Engine facade over graph + caches
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use ai::Difficulty;
pub use engine::{Engine, RandomPair};
