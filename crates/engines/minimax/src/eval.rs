//! Static position evaluation

use chess_rules::{Board, Color, PieceKind, Pos};

/// Material values by piece kind. The king's value only matters as a tiebreak
/// guard; mate itself is scored in the search, not here.
fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 10,
        PieceKind::Knight => 30,
        PieceKind::Bishop => 30,
        PieceKind::Rook => 50,
        PieceKind::Queen => 90,
        PieceKind::King => 900,
    }
}

/// Score the position from `color`'s perspective: material, a small bonus
/// for occupying the 4x4 center, per-piece mobility, and pressure on both
/// kings.
///
/// Mobility counts each piece's raw target squares, so a pinned piece still
/// scores its full range. That can reward king-exposing moves; it is kept
/// because it is part of the opponent's observable playing style.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let mut score = 0i32;

    for r in 0..8i8 {
        for c in 0..8i8 {
            let pos = Pos::new(r, c);
            let piece = match board.piece_at(pos) {
                Some(p) => p,
                None => continue,
            };
            let sign = if piece.color == color { 1 } else { -1 };

            score += sign * piece_value(piece.kind);

            if (2..=5).contains(&r) && (2..=5).contains(&c) {
                score += sign * 5;
            }

            score += sign * piece.legal_targets(board, pos).len() as i32;
        }
    }

    if let Some(own_king) = board.find_king(color) {
        score -= 10 * attackers_on(board, own_king, color);
    }
    if let Some(enemy_king) = board.find_king(color.other()) {
        score += 10 * attackers_on(board, enemy_king, color.other());
    }

    score
}

/// Number of `owner`'s opponents whose target squares include `target`.
fn attackers_on(board: &Board, target: Pos, owner: Color) -> i32 {
    let mut attacks = 0;
    for r in 0..8i8 {
        for c in 0..8i8 {
            let pos = Pos::new(r, c);
            if let Some(p) = board.piece_at(pos) {
                if p.color != owner && p.legal_targets(board, pos).contains(&target) {
                    attacks += 1;
                }
            }
        }
    }
    attacks
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
