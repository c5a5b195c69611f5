//! Core traits for the filtering pipeline.
//!
//! Exclusion rules of the pool walk are `Filter`s, so each rule can be
//! tested on its own and the pipeline composes them in a fixed order.

use crate::error::Result;
use crate::pool::PoolContext;
use sources::Candidate;

/// Core trait for filtering candidates.
///
/// Filters receive one ranking already in walk order, take ownership of it
/// and return what survives, preserving relative order.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to one ranking.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - Watched titles and the pool accumulated so far
    fn apply(&self, candidates: Vec<Candidate>, context: &PoolContext) -> Result<Vec<Candidate>>;
}
