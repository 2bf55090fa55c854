use gameboxd_catalog::InvalidRating;
use gameboxd_db::StoreError;
use thiserror::Error;

/// Errors surfaced by the reconciliation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rating outside `0..=5`; nothing was persisted
    #[error("Invalid rating {0}: must be between 0 and 5")]
    InvalidRating(i64),

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<InvalidRating> for EngineError {
    fn from(err: InvalidRating) -> Self {
        Self::InvalidRating(err.0)
    }
}
