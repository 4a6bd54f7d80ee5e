use evaluation::CacheError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The root position has no legal moves: the game is already over
    /// (checkmate or stalemate) and there is nothing to select.
    #[error("no legal moves to select from")]
    NoLegalMoves,

    #[error(transparent)]
    Cache(#[from] CacheError),
}
