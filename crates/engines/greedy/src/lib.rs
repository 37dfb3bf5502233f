//! Greedy Capture Strategy
//!
//! The middle opponent tier: takes the first capture it finds in the move
//! enumeration, with no regard for what it loses in return. When nothing
//! can be captured it falls back to a random legal move.

use chess_rules::{Board, Move, Strategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A strategy that prefers any capture over any quiet move.
#[derive(Debug, Clone)]
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
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

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for GreedyEngine {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let moves = board.all_legal_moves(board.side_to_move);

        if let Some(capture) = moves.iter().find(|m| m.is_capture()) {
            return Some(*capture);
        }

        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
