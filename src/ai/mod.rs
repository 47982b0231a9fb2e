//! AI move selection
//!
//! Four opponent strengths over the same graph, from biased-random play to
//! depth-limited minimax with alpha-beta pruning. Randomness is injected so
//! tests can drive the strategies with seeded generators; callers that do
//! not care pass `rand::rng()`.

mod hint;
mod minimax;
mod strategies;

pub use hint::hint;
pub use minimax::select_expert_move;

use crate::core::Word;
use crate::graph::WordGraph;
use crate::search::{DistanceEstimator, PathFinder};
use rand::Rng;

/// Opponent strength, dispatched by a closed match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Mostly random with a bias toward the target
    Easy,
    /// Greedy two-step lookahead
    #[default]
    Medium,
    /// Optimal-path following with occasional blocking and feints
    Hard,
    /// Depth-4 minimax with alpha-beta pruning
    Expert,
}

impl Difficulty {
    /// Parse a difficulty from its name, defaulting to Medium
    ///
    /// Supported names: "easy", "medium", "hard", "expert".
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            "expert" => Self::Expert,
            _ => Self::Medium,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

/// Pick the AI's next word, or `None` when `current` has no neighbors
///
/// `opponent_ladder` is the opponent's played sequence, newest last; it is
/// only consulted for blocking (Hard) and position evaluation (Expert) and
/// is never mutated. A `None` return means the mover is stuck and the
/// caller decides the game-level consequence.
pub fn select_move(
    graph: &WordGraph,
    estimator: &mut DistanceEstimator,
    paths: &mut PathFinder,
    current: &Word,
    target: &Word,
    difficulty: Difficulty,
    opponent_ladder: &[Word],
    rng: &mut impl Rng,
) -> Option<Word> {
    match difficulty {
        Difficulty::Easy => strategies::select_easy(graph, estimator, current, target, rng),
        Difficulty::Medium => strategies::select_medium(graph, estimator, current, target, rng),
        Difficulty::Hard => strategies::select_hard(
            graph,
            estimator,
            paths,
            current,
            target,
            opponent_ladder,
            rng,
        ),
        Difficulty::Expert => {
            minimax::select_expert_move(graph, estimator, paths, current, target, opponent_ladder)
        }
    }
}
