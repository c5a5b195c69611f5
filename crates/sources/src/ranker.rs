//! Candidate Ranker - every other movie ordered by similarity
//!
//! ## Algorithm
//! 1. Visit every movie of the graph except the watched one
//! 2. With `GenreScope::SameGenre`, skip movies of another genre unscored
//! 3. Score the rest with cosine similarity, dropping undefined scores
//! 4. Sort by similarity ASCENDING
//!
//! ## Ordering
//! The output is ascending: the least similar movie is at index 0 and the
//! most similar one is last. Ties keep graph insertion order. The
//! recommendation pipeline decides which end it reads from; nothing here
//! reverses the list.

use crate::similarity::cosine_similarity;
use crate::types::{Candidate, GenreScope};
use data_loader::{Catalog, Movie, RatingGraph};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Below this many movies scoring runs on the calling thread
const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Rank every other movie in `graph` by similarity to `movie`.
pub fn rank(movie: &Movie, graph: &RatingGraph, scope: GenreScope) -> Vec<Candidate> {
    rank_with_threshold(movie, graph, scope, DEFAULT_PARALLEL_THRESHOLD)
}

fn rank_with_threshold(
    movie: &Movie,
    graph: &RatingGraph,
    scope: GenreScope,
    parallel_threshold: usize,
) -> Vec<Candidate> {
    let others: Vec<&Movie> = graph
        .all_movies()
        .filter(|other| !scope.is_restricted() || other.genre == movie.genre)
        .collect();

    let score = |other: &&Movie| {
        cosine_similarity(movie, other)
            .map(|sim| Candidate::new(other.id, other.title.as_str(), other.genre.as_str(), sim))
    };

    // Rayon's indexed collect keeps input order, so both branches agree
    let mut candidates: Vec<Candidate> = if others.len() >= parallel_threshold {
        others.par_iter().filter_map(score).collect()
    } else {
        others.iter().filter_map(score).collect()
    };

    // Stable sort: equal similarities stay in insertion order
    candidates.sort_by(|a, b| a.similarity.total_cmp(&b.similarity));
    candidates
}

/// Candidate source backed by a shared catalog.
///
/// Resolves watched titles and ranks against the catalog's graph. Cloning
/// is cheap; every clone shares the same `Arc<Catalog>`.
#[derive(Clone)]
pub struct SimilaritySource {
    /// Shared reference to the catalog (read-only, so no lock needed)
    catalog: Arc<Catalog>,

    /// Graphs with at least this many candidates are scored in parallel
    parallel_threshold: usize,
}

impl SimilaritySource {
    /// Create a new similarity source
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Configure how many candidates trigger parallel scoring (default: 512)
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Rank candidates for an already-resolved movie
    #[instrument(skip(self, movie), fields(movie_id = movie.id, genre = %movie.genre))]
    pub fn rank(&self, movie: &Movie, scope: GenreScope) -> Vec<Candidate> {
        let candidates =
            rank_with_threshold(movie, &self.catalog.graph, scope, self.parallel_threshold);
        debug!(
            "Ranked {} candidates for '{}' ({:?})",
            candidates.len(),
            movie.title,
            scope
        );
        candidates
    }

    /// Rank candidates for a title; `None` if the title is unknown
    pub fn rank_title(&self, title: &str, scope: GenreScope) -> Option<Vec<Candidate>> {
        let movie = self.catalog.movie_by_title(title)?;
        Some(self.rank(movie, scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{MovieRow, RatingRow};

    /// Three comedies and two horror movies rated by four users
    fn create_test_catalog() -> Catalog {
        let movies = vec![
            ("Comedy A", "Comedy"),
            ("Comedy B", "Comedy|Crime"),
            ("Comedy C", "Comedy"),
            ("Horror A", "Drama|Horror"),
            ("Horror B", "Horror"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (title, genres))| MovieRow {
            movie_id: i as u32 + 1,
            title: title.to_string(),
            genres: genres.to_string(),
        })
        .collect::<Vec<_>>();

        let table: [[f32; 5]; 4] = [
            [5.0, 4.0, 1.0, 2.0, 2.0],
            [4.0, 5.0, 2.0, 1.0, 3.0],
            [1.0, 2.0, 5.0, 5.0, 4.0],
            [2.0, 1.0, 4.0, 4.0, 1.0],
        ];
        let mut ratings = Vec::new();
        for (u, row) in table.iter().enumerate() {
            for (m, &rating) in row.iter().enumerate() {
                ratings.push(RatingRow {
                    user_id: u as u32 + 1,
                    movie_id: m as u32 + 1,
                    rating,
                });
            }
        }

        Catalog::build(&movies, &ratings).unwrap()
    }

    #[test]
    fn test_rank_is_ascending() {
        let catalog = create_test_catalog();
        let movie = catalog.graph.get_movie(1).unwrap();

        let ranked = rank(movie, &catalog.graph, GenreScope::AllGenres);

        assert_eq!(ranked.len(), 4);
        assert!(ranked.windows(2).all(|w| w[0].similarity <= w[1].similarity));
        // Comedy B follows Comedy A's rating pattern most closely: last, not first
        assert_eq!(ranked.last().unwrap().title, "Comedy B");
        assert!(ranked.iter().all(|c| c.movie_id != 1));
    }

    #[test]
    fn test_same_genre_scope() {
        let catalog = create_test_catalog();
        let movie = catalog.graph.get_movie(4).unwrap();
        assert_eq!(movie.genre, "Horror");

        let ranked = rank(movie, &catalog.graph, GenreScope::SameGenre);

        assert_eq!(ranked.len(), 1);
        assert!(ranked.iter().all(|c| c.genre == "Horror"));
        assert_eq!(ranked[0].title, "Horror B");
    }

    #[test]
    fn test_undefined_similarities_are_omitted() {
        let mut catalog = create_test_catalog();
        // A movie nobody rated can never be scored
        catalog.graph.add_movie(99, "Unrated", "Comedy");
        let movie = catalog.graph.get_movie(1).unwrap();

        let ranked = rank(movie, &catalog.graph, GenreScope::SameGenre);
        assert!(ranked.iter().all(|c| c.movie_id != 99));
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let catalog = create_test_catalog();
        let movie = catalog.graph.get_movie(3).unwrap();

        let sequential = rank_with_threshold(movie, &catalog.graph, GenreScope::AllGenres, usize::MAX);
        let parallel = rank_with_threshold(movie, &catalog.graph, GenreScope::AllGenres, 0);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_source_rank_title() {
        let source = SimilaritySource::new(Arc::new(create_test_catalog())).with_parallel_threshold(1);

        let ranked = source.rank_title("Comedy C", GenreScope::SameGenre).unwrap();
        assert!(ranked.iter().all(|c| c.genre == "Comedy"));
        assert!(source.rank_title("Not A Movie", GenreScope::AllGenres).is_none());
    }
}
