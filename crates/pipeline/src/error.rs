//! Error types for the recommendation pipeline.
//!
//! Every variant except `Data` is a precondition the caller can check and
//! report on its own (wrong input, too small a catalog). Nothing here is
//! retried: the data is deterministic, so a second attempt fails the same way.

use data_loader::DataLoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// Recommendations need exactly `expected` watched titles
    #[error("Expected {expected} watched movies but got {found}")]
    WrongWatchedCount { expected: usize, found: usize },

    /// A watched title was left blank
    #[error("Watched movie #{position} is empty")]
    EmptyTitle { position: usize },

    /// A watched title is not in the catalog
    #[error("Unknown movie title: {title}")]
    UnknownTitle { title: String },

    /// The candidate pool is smaller than the requested sample
    #[error("Not enough candidates: needed {needed}, found {available}")]
    InsufficientCandidates { needed: usize, available: usize },

    /// The underlying graph lookup failed
    #[error(transparent)]
    Data(#[from] DataLoadError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
