//! Core domain types for the rating data.
//!
//! Two kinds of types live here:
//! - typed CSV rows (`MovieRow`, `RatingRow`) exactly as they appear in the
//!   input files, deserialized through serde
//! - graph vertices (`User`, `Movie`) owned by the `RatingGraph`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

/// Lowest rating a user can give
pub const MIN_RATING: f32 = 0.0;

/// Highest rating a user can give
pub const MAX_RATING: f32 = 5.0;

// =============================================================================
// CSV Rows
// =============================================================================

/// One row of `movies.csv`
///
/// `genres` is the raw pipe-delimited tag list ("Adventure|Children|Fantasy").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRow {
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    pub title: String,
    pub genres: String,
}

/// One row of `ratings.csv`
///
/// Any trailing columns (MovieLens ships a `timestamp`) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRow {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    pub rating: f32,
}

// =============================================================================
// Graph Vertices
// =============================================================================

/// A user vertex.
///
/// `movies` holds one entry per rating edge, keyed by movie id. The same
/// rating is mirrored in the movie's `users` map; only
/// [`RatingGraph::add_edge`](crate::RatingGraph::add_edge) writes either side.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub(crate) movies: BTreeMap<MovieId, f32>,
}

impl User {
    pub(crate) fn new(id: UserId) -> Self {
        Self {
            id,
            movies: BTreeMap::new(),
        }
    }

    /// Ratings given by this user, ordered by movie id
    pub fn ratings(&self) -> &BTreeMap<MovieId, f32> {
        &self.movies
    }

    /// Rating this user gave to `movie_id`, if any
    pub fn rating_for(&self, movie_id: MovieId) -> Option<f32> {
        self.movies.get(&movie_id).copied()
    }
}

/// A movie vertex.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Single normalized label, see [`normalize_genre`](crate::normalize_genre)
    pub genre: String,
    pub(crate) users: BTreeMap<UserId, f32>,
}

impl Movie {
    pub(crate) fn new(id: MovieId, title: String, genre: String) -> Self {
        Self {
            id,
            title,
            genre,
            users: BTreeMap::new(),
        }
    }

    /// Ratings received by this movie, ordered by user id
    ///
    /// The ordering matters: the similarity engine walks two of these maps
    /// side by side and relies on both being sorted by the same key.
    pub fn ratings(&self) -> &BTreeMap<UserId, f32> {
        &self.users
    }

    /// Rating `user_id` gave this movie, if any
    pub fn rating_by(&self, user_id: UserId) -> Option<f32> {
        self.users.get(&user_id).copied()
    }

    /// Number of users who rated this movie
    pub fn rating_count(&self) -> usize {
        self.users.len()
    }
}
