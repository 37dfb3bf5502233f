use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Pos};

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Piece {
    /// Squares this piece could move to from `from`, ignoring whether the
    /// move would leave its own king attacked (that filter lives on the
    /// board). A queen's targets are its rook rays followed by its bishop
    /// rays.
    pub fn legal_targets(&self, board: &Board, from: Pos) -> Vec<Pos> {
        let mut out = Vec::new();
        match self.kind {
            PieceKind::Pawn => pawn_targets(board, from, self.color, &mut out),
            PieceKind::Knight => step_targets(board, from, self.color, &KNIGHT_DELTAS, &mut out),
            PieceKind::Bishop => ray_targets(board, from, self.color, &DIAGONALS, &mut out),
            PieceKind::Rook => ray_targets(board, from, self.color, &ORTHOGONALS, &mut out),
            PieceKind::Queen => {
                ray_targets(board, from, self.color, &ORTHOGONALS, &mut out);
                ray_targets(board, from, self.color, &DIAGONALS, &mut out);
            }
            PieceKind::King => step_targets(board, from, self.color, &KING_DELTAS, &mut out),
        }
        out
    }
}

/// One square forward if empty, two from the start row if both are empty,
/// diagonal steps only onto enemy pieces. Promotion is the board's concern.
fn pawn_targets(board: &Board, from: Pos, color: Color, out: &mut Vec<Pos>) {
    let dir: i8 = match color {
        Color::White => -1,
        Color::Black => 1,
    };
    let start_row: i8 = match color {
        Color::White => 6,
        Color::Black => 1,
    };

    let ahead = from.row + dir;
    if (0..8).contains(&ahead) && board.at(ahead, from.col).is_none() {
        out.push(Pos::new(ahead, from.col));
        if from.row == start_row && board.at(ahead + dir, from.col).is_none() {
            out.push(Pos::new(ahead + dir, from.col));
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = board.at(ahead, from.col + dc) {
            if target.color != color {
                out.push(Pos::new(ahead, from.col + dc));
            }
        }
    }
}

fn step_targets(board: &Board, from: Pos, color: Color, deltas: &[(i8, i8)], out: &mut Vec<Pos>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(p) if p.color != color => out.push(to),
                _ => {}
            }
        }
    }
}

/// Trace each direction until the board edge or a piece. An enemy square
/// ends the ray after being added, a friendly square ends it without.
fn ray_targets(board: &Board, from: Pos, color: Color, dirs: &[(i8, i8)], out: &mut Vec<Pos>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(p) if p.color != color => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
