use chess::{Board, Color};
use utils::{measure_mobility, pawn_advancement, piece_counts};

use crate::cache::{CacheError, ValuationCache};
use crate::def::Evaluator;
use crate::weights::Weights;

/// Closed-form evaluation: weighted material plus mobility and
/// pawn-advancement differentials, memoized in the valuation cache by
/// Zobrist hash.
pub struct HeuristicEvaluator {
    weights: Weights,
    cache: ValuationCache,
    computed: u64,
    cache_hits: u64,
}

impl HeuristicEvaluator {
    pub fn new(cache: ValuationCache) -> Self {
        Self::with_weights(cache, Weights::default())
    }

    pub fn with_weights(cache: ValuationCache, weights: Weights) -> Self {
        Self {
            weights,
            cache,
            computed: 0,
            cache_hits: 0,
        }
    }

    /// Positions evaluated from scratch since construction.
    pub fn computed(&self) -> u64 {
        self.computed
    }

    /// Evaluations answered from the cache since construction.
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    pub fn cache(&self) -> &ValuationCache {
        &self.cache
    }

    /// The material term alone: the weighted sum of the twelve fixed-order
    /// piece counts.
    pub fn material(&self, board: &Board) -> f64 {
        piece_counts(board)
            .iter()
            .zip(self.weights.material.iter())
            .map(|(&count, &weight)| count as f64 * weight)
            .sum()
    }
}

impl Evaluator for HeuristicEvaluator {
    fn name(&self) -> String {
        "heuristic".to_string()
    }

    fn evaluate(&mut self, board: &Board) -> f64 {
        let key = board.get_hash();
        if let Some(value) = self.cache.lookup(key) {
            self.cache_hits += 1;
            return value;
        }

        let mut valuation = self.material(board);

        let mobility = measure_mobility(board);
        valuation += self.weights.mobility
            * (mobility.white_moves * mobility.white_concentration
                - mobility.black_moves * mobility.black_concentration);

        valuation += self.weights.pawn_advance
            * (pawn_advancement(board, Color::White) - pawn_advancement(board, Color::Black));

        self.cache.insert(key, valuation);
        self.computed += 1;

        valuation
    }

    fn flush(&mut self) -> Result<(), CacheError> {
        self.cache.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn evaluator() -> HeuristicEvaluator {
        let dir = tempfile::tempdir().unwrap();
        let cache = ValuationCache::load(dir.path().join("cache.bin")).unwrap();
        HeuristicEvaluator::new(cache)
    }

    #[test]
    fn starting_position_reduces_to_the_material_term() {
        // Mobility and pawn advancement cancel by symmetry, leaving only
        // the asymmetry of the black material scaling.
        let mut eval = evaluator();
        let board = Board::default();

        let valuation = eval.evaluate(&board);
        assert_eq!(valuation, eval.material(&board));
        assert!(valuation > 0.0);
    }

    #[test]
    fn an_extra_white_queen_is_worth_exactly_her_weight() {
        let eval = evaluator();
        let bare = Board::from_str("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let with_queen = Board::from_str("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();

        let delta = eval.material(&with_queen) - eval.material(&bare);
        let queen_weight = Weights::default().material[4];
        assert!((delta - queen_weight).abs() < 1e-9);
    }

    #[test]
    fn second_evaluation_is_served_from_the_cache() {
        let mut eval = evaluator();
        let board = Board::default();

        let first = eval.evaluate(&board);
        assert_eq!(eval.computed(), 1);

        let second = eval.evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(eval.computed(), 1);
        assert_eq!(eval.cache_hits(), 1);
    }

    #[test]
    fn cached_valuations_survive_a_flush_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.bin");
        let board = Board::default();

        let mut eval =
            HeuristicEvaluator::new(ValuationCache::load(&path).unwrap());
        let valuation = eval.evaluate(&board);
        eval.flush().unwrap();

        let mut reloaded =
            HeuristicEvaluator::new(ValuationCache::load(&path).unwrap());
        assert_eq!(reloaded.evaluate(&board), valuation);
        assert_eq!(reloaded.computed(), 0);
        assert_eq!(reloaded.cache_hits(), 1);
    }

    #[test]
    fn material_is_independent_of_pawn_placement() {
        let eval = evaluator();
        let home = Board::from_str("4k3/8/8/8/8/8/P7/4K3 w - - 0 1").unwrap();
        let advanced = Board::from_str("4k3/8/P7/8/8/8/8/4K3 w - - 0 1").unwrap();

        assert_eq!(eval.material(&home), eval.material(&advanced));
        assert_eq!(pawn_advancement(&advanced, Color::White), 4.0);
    }
}
