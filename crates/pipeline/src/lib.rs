//! Pool building and final selection for movie recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for the pool walk
//! - FilterPipeline for composing filters and feeding the pool
//! - CandidatePool / PoolContext, the state a walk accumulates
//! - Random selection of the final titles
//! - RecommendConfig and RecommendError shared with the orchestrator
//!
//! ## Architecture
//! For every watched movie the orchestrator hands one ranking, put in walk
//! order, to `FilterPipeline::walk_into`:
//! 1. Watched titles are removed
//! 2. Titles already pooled (or repeated in the ranking) are removed
//! 3. Optionally, only the first N survivors are kept
//! 4. Survivors are appended to the pool
//!
//! Once both passes are done, `sample_titles` draws the answer.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, PoolContext, sample_titles};
//!
//! let pipeline = FilterPipeline::pool_walk(None);
//! let mut context = PoolContext::new(watched.iter().cloned());
//! pipeline.walk_into(ranked, &mut context)?;
//!
//! let picks = sample_titles(context.pool.titles(), 5, &mut rand::rng())?;
//! ```

pub mod config;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod pool;
pub mod sampler;
pub mod traits;

// Re-export main types
pub use config::{RecommendConfig, WalkOrder, WATCHED_COUNT};
pub use error::{RecommendError, Result};
pub use filter_pipeline::FilterPipeline;
pub use pool::{CandidatePool, PoolContext};
pub use sampler::sample_titles;
pub use traits::Filter;
