//! AI-vs-AI duel simulation
//!
//! Drives two AI contestants over the same engine. Both begin at the start
//! word and race to the target, alternating turns; a contestant with no
//! legal move loses. This module plays the role of the external game
//! session: it owns the ladders and passes them into the core by reference.

use crate::ai::Difficulty;
use crate::core::Word;
use crate::engine::Engine;
use rand::Rng;

/// Configuration for a duel
pub struct DuelConfig {
    pub start: Word,
    pub target: Word,
    pub first: Difficulty,
    pub second: Difficulty,
    /// Total turn budget across both contestants
    pub max_turns: usize,
}

impl DuelConfig {
    #[must_use]
    pub const fn new(start: Word, target: Word, first: Difficulty, second: Difficulty) -> Self {
        Self {
            start,
            target,
            first,
            second,
            max_turns: 40,
        }
    }
}

/// How a duel ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelOutcome {
    /// The first contestant reached the target, or the second got stuck
    FirstWins,
    /// The second contestant reached the target, or the first got stuck
    SecondWins,
    /// Turn budget exhausted with no winner
    Draw,
}

/// Result of a completed duel
pub struct DuelResult {
    pub outcome: DuelOutcome,
    pub first_ladder: Vec<Word>,
    pub second_ladder: Vec<Word>,
    pub turns: usize,
}

/// Play a full duel to completion
pub fn run_duel(engine: &mut Engine, config: &DuelConfig, rng: &mut impl Rng) -> DuelResult {
    let mut first_ladder = vec![config.start.clone()];
    let mut second_ladder = vec![config.start.clone()];

    for turn in 0..config.max_turns {
        let first_moves = turn % 2 == 0;
        let (ladder, opponent_ladder, difficulty) = if first_moves {
            (&mut first_ladder, &second_ladder, config.first)
        } else {
            (&mut second_ladder, &first_ladder, config.second)
        };

        let Some(current) = ladder.last().cloned() else {
            break;
        };

        let chosen = engine.select_ai_move_with_rng(
            &current,
            &config.target,
            difficulty,
            opponent_ladder,
            rng,
        );

        match chosen {
            None => {
                // Stuck contestant forfeits
                let outcome = if first_moves {
                    DuelOutcome::SecondWins
                } else {
                    DuelOutcome::FirstWins
                };
                return DuelResult {
                    outcome,
                    first_ladder,
                    second_ladder,
                    turns: turn + 1,
                };
            }
            Some(word) => {
                let reached = word == config.target;
                ladder.push(word);
                if reached {
                    let outcome = if first_moves {
                        DuelOutcome::FirstWins
                    } else {
                        DuelOutcome::SecondWins
                    };
                    return DuelResult {
                        outcome,
                        first_ladder,
                        second_ladder,
                        turns: turn + 1,
                    };
                }
            }
        }
    }

    DuelResult {
        outcome: DuelOutcome::Draw,
        first_ladder,
        second_ladder,
        turns: config.max_turns,
    }
}
