mod cache;
mod def;
mod heuristic;
mod weights;

pub use cache::{CacheError, ValuationCache};
pub use def::Evaluator;
pub use heuristic::HeuristicEvaluator;
pub use weights::{Weights, BLACK_MATERIAL_SCALE};
