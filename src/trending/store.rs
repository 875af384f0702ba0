use async_trait::async_trait;
use thiserror::Error;

use crate::schemas::{Movie, TrendingEntry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrendingError {
    #[error("network error: {0}")]
    Network(String),

    #[error("counter store responded with HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed counter store response: {0}")]
    Parse(String),

    #[error("counter store error: {0}")]
    Backend(String),
}

pub type TrendingResult<T> = Result<T, TrendingError>;

/// Ranked search counter keyed by search text.
///
/// Implementations only need read-modify-write semantics; concurrent
/// increments from other sessions may overwrite each other.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increment the counter for `query`, creating it from `movie` when absent.
    async fn find_or_increment(&self, query: &str, movie: &Movie) -> TrendingResult<()>;

    /// Up to `n` entries ordered by descending count.
    async fn list_top(&self, n: usize) -> TrendingResult<Vec<TrendingEntry>>;
}
