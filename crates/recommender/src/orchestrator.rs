//! # Recommendation Orchestrator
//!
//! This module coordinates the entire recommendation pipeline:
//! 1. Validate and resolve the three watched titles
//! 2. Genre pass: rank same-genre movies for each watched movie and walk
//!    each ranking into the candidate pool
//! 3. Fallback pass: if the pool is still too small, repeat across all genres
//! 4. Draw the final titles at random from the pool
//!
//! Steps 1-3 are deterministic for a given catalog and config; only step 4
//! consumes randomness, and the caller supplies the random source.

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, instrument};

use data_loader::{Catalog, Movie};
use pipeline::{
    FilterPipeline, PoolContext, RecommendConfig, RecommendError, Result, WATCHED_COUNT,
    sample_titles,
};
use sources::{GenreScope, SimilaritySource};

/// Main orchestrator that coordinates the recommendation pipeline
///
/// Holds only shared, read-only state, so one instance (or its clones) can
/// serve concurrent requests.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    source: SimilaritySource,
    pool_walk: Arc<FilterPipeline>,
    config: RecommendConfig,
}

impl Recommender {
    /// Create a recommender with the default configuration
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, RecommendConfig::default())
    }

    /// Create a recommender with an explicit configuration
    pub fn with_config(catalog: Arc<Catalog>, config: RecommendConfig) -> Self {
        let source = SimilaritySource::new(catalog.clone());
        let pool_walk = Arc::new(FilterPipeline::pool_walk(config.per_movie_cap));
        Self {
            catalog,
            source,
            pool_walk,
            config,
        }
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Main entry point: pick recommendations for three watched titles
    ///
    /// # Errors
    /// * `WrongWatchedCount` / `EmptyTitle` / `UnknownTitle` for bad input
    /// * `InsufficientCandidates` if the pool is smaller than the sample size
    pub fn recommend<S, R>(&self, watched: &[S], rng: &mut R) -> Result<Vec<String>>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let start_time = Instant::now();

        let pool = self.candidate_pool(watched)?;
        let picks = sample_titles(&pool, self.config.sample_size, rng)?;

        info!(
            "Selected {} of {} pooled candidates in {:.2?}",
            picks.len(),
            pool.len(),
            start_time.elapsed()
        );
        Ok(picks)
    }

    /// The deterministic candidate pool (genre pass, then fallback pass if
    /// needed) that `recommend` samples from, in acceptance order
    #[instrument(skip(self, watched))]
    pub fn candidate_pool<S: AsRef<str>>(&self, watched: &[S]) -> Result<Vec<String>> {
        let movies = self.resolve_watched(watched)?;
        let mut context = PoolContext::new(watched.iter().map(|title| title.as_ref()));

        self.run_pass(&movies, GenreScope::SameGenre, &mut context)?;
        info!("Genre pass pooled {} candidates", context.pool.len());

        if context.pool.len() < self.config.fallback_threshold {
            info!(
                "Fewer than {} candidates, running fallback pass across all genres",
                self.config.fallback_threshold
            );
            self.run_pass(&movies, GenreScope::AllGenres, &mut context)?;
            info!("Fallback pass pooled {} candidates", context.pool.len());
        }

        Ok(context.pool.into_titles())
    }

    /// Check the watched list and resolve each title to its movie
    pub fn resolve_watched<S: AsRef<str>>(&self, watched: &[S]) -> Result<Vec<&Movie>> {
        if watched.len() != WATCHED_COUNT {
            return Err(RecommendError::WrongWatchedCount {
                expected: WATCHED_COUNT,
                found: watched.len(),
            });
        }

        watched
            .iter()
            .enumerate()
            .map(|(idx, title)| {
                let title = title.as_ref();
                if title.trim().is_empty() {
                    return Err(RecommendError::EmptyTitle { position: idx + 1 });
                }
                let movie_id = self
                    .catalog
                    .titles
                    .lookup(title)
                    .ok_or_else(|| RecommendError::UnknownTitle {
                        title: title.to_string(),
                    })?;
                Ok(self.catalog.graph.get_movie(movie_id)?)
            })
            .collect()
    }

    /// Walk one ranking per watched movie into the pool
    fn run_pass(&self, movies: &[&Movie], scope: GenreScope, context: &mut PoolContext) -> Result<()> {
        for movie in movies {
            let ranked = self.config.walk_order.arrange(self.source.rank(movie, scope));
            let ranked_len = ranked.len();
            let added = self.pool_walk.walk_into(ranked, context)?;
            debug!(
                "'{}' ({:?}): {} ranked, {} added, pool now {}",
                movie.title,
                scope,
                ranked_len,
                added,
                context.pool.len()
            );
        }
        Ok(())
    }
}
