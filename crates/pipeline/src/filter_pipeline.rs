//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and the walk that
//! feeds a filtered ranking into the candidate pool.

use crate::error::Result;
use crate::filters::{AlreadyPooledFilter, AlreadyWatchedFilter, PerMovieCapFilter};
use crate::pool::PoolContext;
use crate::traits::Filter;
use sources::Candidate;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyWatchedFilter)
///     .add_filter(AlreadyPooledFilter)
///     .add_filter(PerMovieCapFilter::new(5));
///
/// let accepted = pipeline.walk_into(ranked, &mut context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The exclusion rules of the pool walk, with an optional per-movie cap.
    pub fn pool_walk(per_movie_cap: Option<usize>) -> Self {
        let pipeline = Self::new()
            .add_filter(AlreadyWatchedFilter)
            .add_filter(AlreadyPooledFilter);
        match per_movie_cap {
            Some(cap) => pipeline.add_filter(PerMovieCapFilter::new(cap)),
            None => pipeline,
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The filtered candidates after all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, candidates: Vec<Candidate>, context: &PoolContext) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::trace!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            tracing::trace!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }

    /// Filter one ranking (already in walk order) and append the survivors
    /// to the pool. Returns how many titles were added.
    pub fn walk_into(&self, ranked: Vec<Candidate>, context: &mut PoolContext) -> Result<usize> {
        let accepted = self.apply(ranked, context)?;
        let mut added = 0;
        for candidate in &accepted {
            if context.pool.push(&candidate.title) {
                added += 1;
            }
        }
        Ok(added)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
