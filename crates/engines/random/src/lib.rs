//! Random Move Strategy
//!
//! The weakest opponent tier: selects uniformly at random from all legal
//! moves. Useful for:
//! - Exercising the rules engine and harness before anything smarter exists
//! - Baseline comparisons (any real strategy should easily beat this)
//! - The fallback half of the greedy-capture strategy

use chess_rules::{Board, Move, Strategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A strategy that plays random legal moves.
///
/// The generator is owned rather than process-global so tests can pin the
/// seed and replay a choice.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed constructor for deterministic tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomEngine {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let moves = board.all_legal_moves(board.side_to_move);
        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
