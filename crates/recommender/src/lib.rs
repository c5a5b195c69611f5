//! Recommendation service for Movie Match.
//!
//! This crate contains the orchestrator that runs the recommendation
//! pipeline against a shared catalog, and the cache that keeps a loaded
//! catalog around between requests.

pub mod cache;
pub mod orchestrator;

pub use cache::{CatalogCache, SourceFingerprint};
pub use orchestrator::Recommender;

// Re-exported so callers only need this crate for the common path
pub use pipeline::{RecommendConfig, RecommendError, WalkOrder};
