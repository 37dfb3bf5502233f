pub mod board;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::{AutoQueen, Board, PromotionChooser};
pub use perft::perft;
pub use types::*;

/// Trait implemented by all computer opponents (random, greedy, minimax).
///
/// A strategy picks a move for whichever side is to move on the given
/// board; it never mutates the real board, exploring continuations on
/// copies instead. The call is synchronous and runs to completion.
pub trait Strategy: Send {
    /// Pick a move for the side to move. `None` means no legal move
    /// exists (checkmate or stalemate, distinguished by the board).
    fn choose_move(&mut self, board: &Board) -> Option<Move>;

    /// Strategy name for match reporting.
    fn name(&self) -> &str;
}
