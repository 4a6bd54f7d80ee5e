use chess::{Board, ChessMove, Color, MoveGen};
use evaluation::Evaluator;

/// Orders the legal moves by a one-ply evaluation of each successor
/// position, best-first for the side to move: White prefers high
/// valuations, Black low ones.
///
/// Ordering only affects how early alpha-beta cutoffs happen; the final
/// minimax value is the same under any order.
pub fn ordered_moves(board: &Board, evaluator: &mut dyn Evaluator) -> Vec<ChessMove> {
    let mut scored: Vec<(ChessMove, f64)> = MoveGen::new_legal(board)
        .map(|mv| (mv, evaluator.evaluate(&board.make_move_new(mv))))
        .collect();

    match board.side_to_move() {
        Color::White => scored.sort_unstable_by(|a, b| b.1.total_cmp(&a.1)),
        Color::Black => scored.sort_unstable_by(|a, b| a.1.total_cmp(&b.1)),
    }

    scored.into_iter().map(|(mv, _)| mv).collect()
}
