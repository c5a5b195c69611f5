//! Tunables of the recommendation pipeline.
//!
//! The defaults reproduce the historical output of Movie Match exactly,
//! including its two surprising behaviors (see [`WalkOrder`] and
//! `per_movie_cap`). Each can be switched independently.

use sources::Candidate;

/// Number of watched movies a request must name
pub const WATCHED_COUNT: usize = 3;

/// Which end of an ascending ranking the pool walk starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkOrder {
    /// Walk rankings head-first. Rankings are ascending, so this takes the
    /// LEAST similar eligible movies first. Matches historical output.
    #[default]
    LeastSimilarFirst,
    /// Walk rankings tail-first, most similar movies first.
    MostSimilarFirst,
}

impl WalkOrder {
    /// Put an ascending ranking into walk order
    pub fn arrange(self, mut ranked: Vec<Candidate>) -> Vec<Candidate> {
        if self == WalkOrder::MostSimilarFirst {
            ranked.reverse();
        }
        ranked
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendConfig {
    pub walk_order: WalkOrder,
    /// Accept at most this many new titles per watched movie and pass.
    /// `None` walks each ranking to the end.
    pub per_movie_cap: Option<usize>,
    /// Run the all-genre pass when the genre pass yields fewer titles
    pub fallback_threshold: usize,
    /// Titles drawn from the final pool
    pub sample_size: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            walk_order: WalkOrder::LeastSimilarFirst,
            per_movie_cap: None,
            fallback_threshold: 3,
            sample_size: 5,
        }
    }
}

impl RecommendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the walk direction (default: least similar first)
    pub fn with_walk_order(mut self, walk_order: WalkOrder) -> Self {
        self.walk_order = walk_order;
        self
    }

    /// Configure the per-movie cap (default: none)
    pub fn with_per_movie_cap(mut self, cap: Option<usize>) -> Self {
        self.per_movie_cap = cap;
        self
    }

    /// Configure the fallback threshold (default: 3)
    pub fn with_fallback_threshold(mut self, threshold: usize) -> Self {
        self.fallback_threshold = threshold;
        self
    }

    /// Configure how many titles are returned (default: 5)
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending() -> Vec<Candidate> {
        vec![
            Candidate::new(1, "Low", "Drama", 0.1),
            Candidate::new(2, "Mid", "Drama", 0.5),
            Candidate::new(3, "High", "Drama", 0.9),
        ]
    }

    #[test]
    fn test_defaults_match_historical_behavior() {
        let config = RecommendConfig::default();
        assert_eq!(config.walk_order, WalkOrder::LeastSimilarFirst);
        assert_eq!(config.per_movie_cap, None);
        assert_eq!(config.fallback_threshold, 3);
        assert_eq!(config.sample_size, 5);
    }

    #[test]
    fn test_walk_order_arrange() {
        let head_first = WalkOrder::LeastSimilarFirst.arrange(ascending());
        assert_eq!(head_first[0].title, "Low");

        let tail_first = WalkOrder::MostSimilarFirst.arrange(ascending());
        assert_eq!(tail_first[0].title, "High");
        assert_eq!(tail_first[2].title, "Low");
    }

    #[test]
    fn test_builder() {
        let config = RecommendConfig::new()
            .with_walk_order(WalkOrder::MostSimilarFirst)
            .with_per_movie_cap(Some(5))
            .with_sample_size(3);
        assert_eq!(config.walk_order, WalkOrder::MostSimilarFirst);
        assert_eq!(config.per_movie_cap, Some(5));
        assert_eq!(config.sample_size, 3);
        assert_eq!(config.fallback_threshold, 3);
    }
}
