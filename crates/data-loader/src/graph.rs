//! The bipartite rating graph.
//!
//! Users and movies are vertices; a rating is an edge stored on both
//! endpoints. The graph owns every vertex, and vertices refer to each other
//! only by id, so there is no shared ownership between them.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::collections::HashMap;

/// Main data structure holding every user, movie and rating edge.
///
/// Lookups by id are O(1) through the two HashMaps. `movie_order` remembers
/// insertion order so `all_movies` is stable for a given graph.
#[derive(Debug, Default)]
pub struct RatingGraph {
    pub(crate) users: HashMap<UserId, User>,
    pub(crate) movies: HashMap<MovieId, Movie>,
    movie_order: Vec<MovieId>,
}

impl RatingGraph {
    /// Creates a new, empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user with the given id. No-op if it already exists.
    pub fn add_user(&mut self, id: UserId) {
        self.users.entry(id).or_insert_with(|| User::new(id));
    }

    /// Insert a movie. No-op if the id already exists (first write wins,
    /// later titles or genres for the same id are dropped).
    pub fn add_movie(&mut self, id: MovieId, title: impl Into<String>, genre: impl Into<String>) {
        if self.movies.contains_key(&id) {
            return;
        }
        self.movies.insert(id, Movie::new(id, title.into(), genre.into()));
        self.movie_order.push(id);
    }

    /// Add (or overwrite) the rating edge between a user and a movie.
    ///
    /// Both endpoints are checked before either side is written, so a failed
    /// call leaves the graph untouched.
    pub fn add_edge(&mut self, user_id: UserId, movie_id: MovieId, rating: f32) -> Result<()> {
        if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(DataLoadError::InvalidValue {
                field: "rating".to_string(),
                value: rating.to_string(),
            });
        }
        if !self.users.contains_key(&user_id) {
            return Err(DataLoadError::missing_user(user_id));
        }
        let movie = self
            .movies
            .get_mut(&movie_id)
            .ok_or_else(|| DataLoadError::missing_movie(movie_id))?;
        movie.users.insert(user_id, rating);

        // Presence checked above
        if let Some(user) = self.users.get_mut(&user_id) {
            user.movies.insert(movie_id, rating);
        }
        Ok(())
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Result<&Movie> {
        self.movies
            .get(&id)
            .ok_or_else(|| DataLoadError::missing_movie(id))
    }

    /// Get a user by ID
    pub fn get_user(&self, id: UserId) -> Result<&User> {
        self.users
            .get(&id)
            .ok_or_else(|| DataLoadError::missing_user(id))
    }

    /// Every movie in the order it was first added
    pub fn all_movies(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.movie_order
            .iter()
            .filter_map(move |id| self.movies.get(id))
    }

    /// Get counts (users, movies, rating edges) for logging/validation
    pub fn counts(&self) -> (usize, usize, usize) {
        let edges = self.users.values().map(|u| u.movies.len()).sum();
        (self.users.len(), self.movies.len(), edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> RatingGraph {
        let mut graph = RatingGraph::new();
        graph.add_user(1);
        graph.add_user(2);
        graph.add_movie(10, "Toy Story (1995)", "Children");
        graph.add_movie(20, "Heat (1995)", "Action");
        graph
    }

    #[test]
    fn test_empty_graph() {
        let graph = RatingGraph::new();
        assert_eq!(graph.counts(), (0, 0, 0));
        assert_eq!(graph.all_movies().count(), 0);
    }

    #[test]
    fn test_add_user_is_idempotent() {
        let mut graph = create_test_graph();
        graph.add_edge(1, 10, 4.0).unwrap();
        graph.add_user(1);

        // Re-adding must not reset the user's ratings
        assert_eq!(graph.get_user(1).unwrap().rating_for(10), Some(4.0));
        assert_eq!(graph.counts().0, 2);
    }

    #[test]
    fn test_add_movie_first_write_wins() {
        let mut graph = create_test_graph();
        graph.add_movie(10, "Something Else", "Horror");

        let movie = graph.get_movie(10).unwrap();
        assert_eq!(movie.title, "Toy Story (1995)");
        assert_eq!(movie.genre, "Children");
        assert_eq!(graph.counts().1, 2);
    }

    #[test]
    fn test_add_edge_mirrors_rating() {
        let mut graph = create_test_graph();
        graph.add_edge(2, 20, 3.5).unwrap();

        assert_eq!(graph.get_user(2).unwrap().rating_for(20), Some(3.5));
        assert_eq!(graph.get_movie(20).unwrap().rating_by(2), Some(3.5));
        assert_eq!(graph.counts().2, 1);
    }

    #[test]
    fn test_add_edge_overwrites_both_sides() {
        let mut graph = create_test_graph();
        graph.add_edge(1, 10, 2.0).unwrap();
        graph.add_edge(1, 10, 5.0).unwrap();

        assert_eq!(graph.get_user(1).unwrap().rating_for(10), Some(5.0));
        assert_eq!(graph.get_movie(10).unwrap().rating_by(1), Some(5.0));
        assert_eq!(graph.counts().2, 1);
    }

    #[test]
    fn test_add_edge_missing_vertex_leaves_graph_unchanged() {
        let mut graph = create_test_graph();

        let err = graph.add_edge(99, 10, 4.0).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingVertex { id: 99, .. }));

        let err = graph.add_edge(1, 99, 4.0).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingVertex { id: 99, .. }));

        assert_eq!(graph.counts(), (2, 2, 0));
        assert!(graph.get_user(1).unwrap().ratings().is_empty());
        assert!(graph.get_movie(10).unwrap().ratings().is_empty());
    }

    #[test]
    fn test_add_edge_rejects_out_of_range_rating() {
        let mut graph = create_test_graph();

        assert!(matches!(
            graph.add_edge(1, 10, 5.5),
            Err(DataLoadError::InvalidValue { .. })
        ));
        assert!(graph.add_edge(1, 10, -0.5).is_err());
        assert!(graph.add_edge(1, 10, f32::NAN).is_err());
        assert_eq!(graph.counts().2, 0);

        // Bounds are inclusive
        graph.add_edge(1, 10, 0.0).unwrap();
        graph.add_edge(2, 10, 5.0).unwrap();
        assert_eq!(graph.counts().2, 2);
    }

    #[test]
    fn test_get_missing_movie_is_error() {
        let graph = create_test_graph();
        assert!(matches!(
            graph.get_movie(404),
            Err(DataLoadError::MissingVertex { .. })
        ));
        assert!(graph.get_user(404).is_err());
    }

    #[test]
    fn test_all_movies_insertion_order() {
        let mut graph = RatingGraph::new();
        for id in [5, 3, 9, 1] {
            graph.add_movie(id, format!("Movie {}", id), "Drama");
        }
        let ids: Vec<MovieId> = graph.all_movies().map(|m| m.id).collect();
        assert_eq!(ids, vec![5, 3, 9, 1]);
    }
}
