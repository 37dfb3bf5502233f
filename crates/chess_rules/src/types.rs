#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate. Row 0 is Black's back rank; White's pieces start on
/// rows 6 and 7 and White pawns advance toward decreasing row.
///
/// Stored as `i8` so adjacency probes may step off the board and be caught
/// by a range check instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// The square `(dr, dc)` away, or `None` when that falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Pos> {
        let p = Pos::new(self.row + dr, self.col + dc);
        if p.in_bounds() {
            Some(p)
        } else {
            None
        }
    }
}

/// Record of one committed move, kept on the board's history stack so it
/// can be reverted. `moved` is the piece before any promotion; `captured`
/// is the previous occupant of `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: Pos, to: Pos, moved: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
