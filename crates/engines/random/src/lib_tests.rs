use super::*;
use chess_rules::Color;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::startpos();

    let chosen = engine.choose_move(&board).expect("startpos has moves");

    let legal = board.all_legal_moves(Color::White);
    assert!(legal.contains(&chosen));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let board =
        Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");

    assert!(engine.choose_move(&board).is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let board = Board::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");

    assert!(engine.choose_move(&board).is_none());
}

#[test]
fn seeded_engines_agree() {
    let board = Board::startpos();
    let first = RandomEngine::seeded(42).choose_move(&board);
    let second = RandomEngine::seeded(42).choose_move(&board);

    assert!(first.is_some());
    assert_eq!(first, second);
}
