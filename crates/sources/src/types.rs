//! Types shared by the similarity engine and the candidate ranker.

use data_loader::MovieId;
use serde::Serialize;

/// Which movies a ranking pass may score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GenreScope {
    /// Only movies whose normalized genre equals the watched movie's genre
    SameGenre,
    /// Every movie in the graph
    AllGenres,
}

impl GenreScope {
    /// `true` when candidates of a different genre are skipped
    pub fn is_restricted(self) -> bool {
        matches!(self, GenreScope::SameGenre)
    }
}

/// A movie scored against one watched movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub movie_id: MovieId,
    pub title: String,
    pub genre: String,
    /// Cosine similarity to the watched movie, in [0, 1] for valid ratings
    pub similarity: f64,
}

impl Candidate {
    pub fn new(
        movie_id: MovieId,
        title: impl Into<String>,
        genre: impl Into<String>,
        similarity: f64,
    ) -> Self {
        Self {
            movie_id,
            title: title.into(),
            genre: genre.into(),
            similarity,
        }
    }
}
