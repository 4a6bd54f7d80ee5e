use chess::{Board, BoardStatus, Color};
use evaluation::Evaluator;

use crate::move_ordering::ordered_moves;

/// Score awarded for delivering checkmate, scaled by remaining depth so
/// nearer mates score higher.
pub const MATE_SCORE: f64 = 1_000_000.0;

/// Depth-bounded minimax with fail-soft alpha-beta pruning.
///
/// White maximizes, Black minimizes. Successor positions are produced by
/// copy-make, so a searched board is left bit-identical on every exit
/// path, pruning cutoffs included.
pub struct Searcher {
    evaluator: Box<dyn Evaluator>,
    nodes: u64,
}

impl Searcher {
    pub fn new(evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Positions visited since construction.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub(crate) fn evaluator_mut(&mut self) -> &mut dyn Evaluator {
        &mut *self.evaluator
    }

    /// Returns the minimax value of `board` searched `depth` plies deep
    /// within the `(alpha, beta)` window.
    ///
    /// A cutoff returns the updated bound itself, so with an unbounded
    /// initial window the result equals the exhaustive minimax value;
    /// pruning changes only how many nodes are visited.
    pub fn alpha_beta(&mut self, board: &Board, depth: u8, mut alpha: f64, mut beta: f64) -> f64 {
        self.nodes += 1;

        match board.status() {
            BoardStatus::Checkmate => {
                // The side to move is the side that got mated.
                return match board.side_to_move() {
                    Color::White => -MATE_SCORE * (depth as f64 + 1.0),
                    Color::Black => MATE_SCORE * (depth as f64 + 1.0),
                };
            }
            BoardStatus::Stalemate => return 0.0,
            BoardStatus::Ongoing => {}
        }

        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let moves = ordered_moves(board, &mut *self.evaluator);

        match board.side_to_move() {
            Color::White => {
                for mv in moves {
                    let value = self.alpha_beta(&board.make_move_new(mv), depth - 1, alpha, beta);
                    if value > alpha {
                        alpha = value;
                    }
                    if alpha >= beta {
                        return alpha;
                    }
                }
                alpha
            }
            Color::Black => {
                for mv in moves {
                    let value = self.alpha_beta(&board.make_move_new(mv), depth - 1, alpha, beta);
                    if value < beta {
                        beta = value;
                    }
                    if alpha >= beta {
                        return beta;
                    }
                }
                beta
            }
        }
    }
}
