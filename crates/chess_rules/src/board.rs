use crate::types::*;

/// Supplies the piece a promoting pawn becomes. The board consults this
/// exactly once per promoting move; returning `None` promotes to a queen.
pub trait PromotionChooser {
    fn choose(&self, color: Color, at: Pos) -> Option<PieceKind>;
}

/// Chooser that always declines, so every promotion yields a queen. Used
/// wherever no interactive collaborator is available (search copies, the
/// match harness, plain `try_move`).
pub struct AutoQueen;

impl PromotionChooser for AutoQueen {
    fn choose(&self, _color: Color, _at: Pos) -> Option<PieceKind> {
        None
    }
}

/// The 8x8 board, the side to move, and the stack of committed moves.
///
/// All rule enforcement lives here: a move is committed only if it is among
/// the moving piece's targets and does not leave the mover's own king
/// attacked. Checkmate and stalemate are computed on demand, never cached.
#[derive(Debug)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    history: Vec<Move>,
}

impl Board {
    /// Standard starting position, White to move.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (c, &kind) in back.iter().enumerate() {
            b.grid[0][c] = Some(Piece::new(Color::Black, kind));
            b.grid[7][c] = Some(Piece::new(Color::White, kind));
        }
        for c in 0..8 {
            b.grid[1][c] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.grid[6][c] = Some(Piece::new(Color::White, PieceKind::Pawn));
        }
        b
    }

    /// Blank board, White to move. Positions are built up with `set`.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }

    /// Position loader for tests and the match harness.
    ///
    /// Only the piece-placement and side-to-move fields are read; castling,
    /// en-passant and clock fields are accepted and ignored since those
    /// rules are not modeled. Panics on malformed input.
    pub fn from_fen(fen: &str) -> Self {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(
            parts.len() >= 2,
            "Invalid FEN: expected at least placement and side to move"
        );

        let mut b = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        assert!(ranks.len() == 8, "Invalid FEN board section");

        // FEN lists rank 8 first, which is row 0 here.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => panic!("Invalid piece char in FEN: {}", ch),
                    };
                    assert!(col < 8, "Too many files in FEN rank");
                    b.grid[row][col as usize] = Some(Piece::new(color, kind));
                    col += 1;
                }
                assert!(col <= 8, "Too many files in FEN rank");
            }
            assert!(col == 8, "Not enough files in FEN rank");
        }

        b.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => panic!("Invalid side to move in FEN: {}", other),
        };
        b
    }

    /// Occupant of `(r, c)`, or `None` for an empty or off-board square.
    /// Callers probe adjacency without pre-validating, so out-of-range
    /// coordinates are tolerated rather than rejected.
    pub fn at(&self, r: i8, c: i8) -> Option<Piece> {
        if !Pos::new(r, c).in_bounds() {
            return None;
        }
        self.grid[r as usize][c as usize]
    }

    pub fn piece_at(&self, p: Pos) -> Option<Piece> {
        self.at(p.row, p.col)
    }

    /// Direct square write for setup code and tests. `p` must be on the
    /// board.
    pub fn set(&mut self, p: Pos, pc: Option<Piece>) {
        self.grid[p.row as usize][p.col as usize] = pc;
    }

    /// Attempt a move with the default promotion policy (queen).
    pub fn try_move(&mut self, from: Pos, to: Pos) -> bool {
        self.try_move_with(from, to, &AutoQueen)
    }

    /// Attempt a move, consulting `chooser` if it promotes a pawn.
    ///
    /// Returns `false` with the board unchanged when there is no piece at
    /// `from`, the piece does not belong to the side to move, `to` is not
    /// among its targets, or committing would leave the mover's own king
    /// attacked. The last case is enforced by speculatively writing the
    /// move and rolling both squares back if the king turns out attacked.
    pub fn try_move_with(&mut self, from: Pos, to: Pos, chooser: &dyn PromotionChooser) -> bool {
        let piece = match self.piece_at(from) {
            Some(p) if p.color == self.side_to_move => p,
            _ => return false,
        };
        if !piece.legal_targets(self, from).contains(&to) {
            return false;
        }

        let captured = self.piece_at(to);
        self.set(to, Some(piece));
        self.set(from, None);

        if self.in_check(piece.color) {
            self.set(from, Some(piece));
            self.set(to, captured);
            return false;
        }

        // History must be pushed before promotion so undo restores the pawn.
        self.history.push(Move::new(from, to, piece, captured));
        self.promote_pawn(to, chooser);
        self.side_to_move = self.side_to_move.other();
        true
    }

    /// Revert the last committed move. Returns `false` on empty history.
    pub fn undo(&mut self) -> bool {
        let last = match self.history.pop() {
            Some(m) => m,
            None => return false,
        };
        self.set(last.from, Some(last.moved));
        self.set(last.to, last.captured);
        self.side_to_move = self.side_to_move.other();
        true
    }

    /// Independent copy of the squares and side to move, with empty
    /// history. Copies are for search look-ahead; nothing is shared with
    /// the source board.
    pub fn copy(&self) -> Board {
        Board {
            grid: self.grid,
            side_to_move: self.side_to_move,
            history: Vec::new(),
        }
    }

    /// True when any enemy piece's target set contains `color`'s king
    /// square. False when that king is absent.
    pub fn in_check(&self, color: Color) -> bool {
        let king = match self.find_king(color) {
            Some(k) => k,
            None => return false,
        };
        for r in 0..8i8 {
            for c in 0..8i8 {
                let p = match self.at(r, c) {
                    Some(p) => p,
                    None => continue,
                };
                if p.color != color && p.legal_targets(self, Pos::new(r, c)).contains(&king) {
                    return true;
                }
            }
        }
        false
    }

    pub fn find_king(&self, color: Color) -> Option<Pos> {
        for r in 0..8i8 {
            for c in 0..8i8 {
                if let Some(p) = self.at(r, c) {
                    if p.color == color && p.kind == PieceKind::King {
                        return Some(Pos::new(r, c));
                    }
                }
            }
        }
        None
    }

    /// Every move `color` can legally commit, in board scan order
    /// (rows 0..8, then columns 0..8 within a row).
    ///
    /// Each pseudo-legal target is played out on a copy and kept only if
    /// the copy commits it, i.e. the mover's king is not left attacked.
    /// This is the authoritative legality filter; it is also the dominant
    /// cost of search, one board copy per candidate move.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for r in 0..8i8 {
            for c in 0..8i8 {
                let from = Pos::new(r, c);
                let piece = match self.piece_at(from) {
                    Some(p) if p.color == color => p,
                    _ => continue,
                };
                for to in piece.legal_targets(self, from) {
                    let mut probe = self.copy();
                    if probe.try_move(from, to) {
                        moves.push(Move::new(from, to, piece, self.piece_at(to)));
                    }
                }
            }
        }
        moves
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && self.all_legal_moves(color).is_empty()
    }

    /// No legal moves while not in check. Terminal like checkmate, but a
    /// draw; callers must not conflate the two.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.in_check(color) && self.all_legal_moves(color).is_empty()
    }

    fn promote_pawn(&mut self, at: Pos, chooser: &dyn PromotionChooser) {
        let p = match self.piece_at(at) {
            Some(p) if p.kind == PieceKind::Pawn => p,
            _ => return,
        };
        let back_rank = match p.color {
            Color::White => 0,
            Color::Black => 7,
        };
        if at.row != back_rank {
            return;
        }
        let kind = match chooser.choose(p.color, at) {
            Some(k @ (PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => k,
            _ => PieceKind::Queen,
        };
        self.set(at, Some(Piece::new(p.color, kind)));
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
