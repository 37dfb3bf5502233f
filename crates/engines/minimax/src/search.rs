//! Minimax search with alpha-beta pruning

use chess_rules::{Board, Color, Move};

use crate::eval::evaluate;

/// Search the position and return the best move with its score, from the
/// side to move's perspective. `None` when no legal move exists.
///
/// Root moves are tried in board scan order and only a strictly better
/// score replaces the incumbent, so ties keep the first move found. Each
/// root move gets a fresh full window; pruning happens inside the
/// recursion.
pub fn pick_best_move(board: &Board, depth: u8) -> Option<(Move, i32)> {
    let color = board.side_to_move;
    let mut best: Option<(Move, i32)> = None;

    for mv in board.all_legal_moves(color) {
        let mut next = board.copy();
        next.try_move(mv.from, mv.to);

        let value = minimax(
            &next,
            depth.saturating_sub(1),
            false,
            color,
            i32::MIN,
            i32::MAX,
        );

        if best.map_or(true, |(_, b)| value > b) {
            best = Some((mv, value));
        }
    }

    best
}

/// Recursive minimax over board copies, alternating maximizing and
/// minimizing levels for `color`.
///
/// The depth test comes before the terminal test, so a mate sitting exactly
/// at the horizon is scored by the evaluator, not as mate. A side with no
/// moves scores as the mate extreme when in check and as zero otherwise
/// (stalemate shares the draw value).
fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    color: Color,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if depth == 0 {
        return evaluate(board, color);
    }

    let to_move = if maximizing { color } else { color.other() };
    let moves = board.all_legal_moves(to_move);

    if moves.is_empty() {
        if board.in_check(to_move) {
            return if maximizing { i32::MIN + 1 } else { i32::MAX - 1 };
        }
        return 0;
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for mv in moves {
            let mut next = board.copy();
            next.try_move(mv.from, mv.to);
            let eval = minimax(&next, depth - 1, false, color, alpha, beta);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for mv in moves {
            let mut next = board.copy();
            next.try_move(mv.from, mv.to);
            let eval = minimax(&next, depth - 1, true, color, alpha, beta);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
