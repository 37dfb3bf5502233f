use super::*;
use chess_rules::{Color, Piece, PieceKind, Pos};

#[test]
fn greedy_engine_prefers_a_capture() {
    let mut engine = GreedyEngine::new();
    // After 1. e4 d5 the e-pawn can take on d5.
    let board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2");

    let chosen = engine.choose_move(&board).expect("position has moves");

    assert!(chosen.is_capture());
    assert_eq!(chosen.from, Pos::new(4, 4));
    assert_eq!(chosen.to, Pos::new(3, 3));
    assert_eq!(
        chosen.captured,
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
}

#[test]
fn greedy_engine_falls_back_to_random_without_captures() {
    let mut engine = GreedyEngine::new();
    let board = Board::startpos();

    let chosen = engine.choose_move(&board).expect("startpos has moves");

    assert!(!chosen.is_capture());
    assert!(board.all_legal_moves(Color::White).contains(&chosen));
}

#[test]
fn greedy_engine_handles_checkmate() {
    let mut engine = GreedyEngine::new();
    let board =
        Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");

    assert!(engine.choose_move(&board).is_none());
}

#[test]
fn seeded_fallback_is_deterministic() {
    let board = Board::startpos();
    let first = GreedyEngine::seeded(7).choose_move(&board);
    let second = GreedyEngine::seeded(7).choose_move(&board);

    assert_eq!(first, second);
}
