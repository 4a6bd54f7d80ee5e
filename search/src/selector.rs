use chess::{Board, ChessMove, Color, MoveGen};
use evaluation::Evaluator;
use log::debug;

use crate::error::SearchError;
use crate::searcher::Searcher;

/// Top-level move choice: searches every root move to the requested depth
/// and keeps the best value from the root mover's perspective.
pub struct MoveSelector {
    searcher: Searcher,
}

impl MoveSelector {
    pub fn new(evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            searcher: Searcher::new(evaluator),
        }
    }

    /// Positions visited across all selections so far.
    pub fn nodes(&self) -> u64 {
        self.searcher.nodes()
    }

    /// Picks a move for the side to move, searching `depth` plies.
    ///
    /// Every root move is searched with an unbounded window and the
    /// caller's board is never mutated. The evaluator is flushed before
    /// returning, so cached valuations survive the process.
    pub fn select(&mut self, board: &Board, depth: u8) -> Result<(ChessMove, f64), SearchError> {
        let maximizing = board.side_to_move() == Color::White;
        let mut best: Option<(ChessMove, f64)> = None;

        for mv in MoveGen::new_legal(board) {
            let value = self.searcher.alpha_beta(
                &board.make_move_new(mv),
                depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
            );

            debug!("root move {}: {}", mv, value);

            let better = match best {
                None => true,
                Some((_, best_value)) => {
                    if maximizing {
                        value > best_value
                    } else {
                        value < best_value
                    }
                }
            };
            if better {
                best = Some((mv, value));
            }
        }

        let (chosen, value) = best.ok_or(SearchError::NoLegalMoves)?;

        self.searcher.evaluator_mut().flush()?;

        debug!(
            "selected {} ({}) after {} nodes",
            chosen,
            value,
            self.searcher.nodes()
        );

        Ok((chosen, value))
    }
}
