//! Filter implementations for the pool walk.
//!
//! `FilterPipeline::pool_walk` composes them in the order the walk needs:
//! exclusions first, the per-movie cap last.

pub mod already_pooled;
pub mod already_watched;
pub mod per_movie_cap;

// Re-export for convenience
pub use already_pooled::AlreadyPooledFilter;
pub use already_watched::AlreadyWatchedFilter;
pub use per_movie_cap::PerMovieCapFilter;
