//! Terminal-state classification: checkmate, stalemate, and check with
//! escapes, driven both by scripted move sequences and FEN fixtures.

use chess_rules::{Board, Color, Pos};

#[test]
fn test_fools_mate_sequence_ends_in_checkmate() {
    let mut board = Board::startpos();
    // 1. f3 e5  2. g4 Qh4#
    assert!(board.try_move(Pos::new(6, 5), Pos::new(5, 5)));
    assert!(board.try_move(Pos::new(1, 4), Pos::new(3, 4)));
    assert!(board.try_move(Pos::new(6, 6), Pos::new(4, 6)));
    assert!(board.try_move(Pos::new(0, 3), Pos::new(4, 7)));

    assert_eq!(board.side_to_move, Color::White);
    assert!(board.in_check(Color::White));
    assert!(board.is_checkmate(Color::White));
    assert!(!board.is_stalemate(Color::White));
    assert!(board.all_legal_moves(Color::White).is_empty());
}

#[test]
fn test_scholars_mate_position_is_checkmate() {
    let board =
        Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    assert!(board.in_check(Color::Black));
    assert!(board.is_checkmate(Color::Black));
    assert!(board.all_legal_moves(Color::Black).is_empty());
}

#[test]
fn test_stalemate_is_not_checkmate() {
    // Black king cornered on a8 with no moves, but not in check.
    let board = Board::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");
    assert!(board.all_legal_moves(Color::Black).is_empty());
    assert!(!board.in_check(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
}

#[test]
fn test_check_with_escape_is_neither_terminal() {
    // Early queen check that the king can answer.
    let board = Board::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 0 1");
    assert!(board.in_check(Color::Black));
    assert!(!board.all_legal_moves(Color::Black).is_empty());
    assert!(!board.is_checkmate(Color::Black));
    assert!(!board.is_stalemate(Color::Black));
}

#[test]
fn test_undo_backs_out_of_checkmate() {
    let mut board = Board::startpos();
    assert!(board.try_move(Pos::new(6, 5), Pos::new(5, 5)));
    assert!(board.try_move(Pos::new(1, 4), Pos::new(3, 4)));
    assert!(board.try_move(Pos::new(6, 6), Pos::new(4, 6)));
    assert!(board.try_move(Pos::new(0, 3), Pos::new(4, 7)));
    assert!(board.is_checkmate(Color::White));

    assert!(board.undo());
    assert_eq!(board.side_to_move, Color::Black);
    assert!(!board.is_checkmate(Color::White));
    assert!(!board.all_legal_moves(Color::White).is_empty());
}
