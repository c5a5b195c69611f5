//! # Sources Crate
//!
//! Candidate generation for movie recommendations.
//!
//! ## Components
//!
//! ### Similarity Engine
//! Item-item cosine similarity restricted to the users who rated both
//! movies. Undefined (not zero) for a movie against itself or when fewer
//! than two users are shared.
//!
//! ### Candidate Ranker
//! For one watched movie, every other movie with a defined similarity,
//! optionally limited to the same genre, sorted ascending by similarity.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{GenreScope, SimilaritySource};
//! use data_loader::Catalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_files("data/ml-latest-small".as_ref())?);
//! let source = SimilaritySource::new(catalog.clone());
//!
//! let ranked = source.rank_title("Toy Story (1995)", GenreScope::SameGenre).unwrap();
//! // Most similar movie is the LAST element
//! println!("{:?}", ranked.last());
//! ```

// Public modules
pub mod ranker;
pub mod similarity;
pub mod types;

// Re-export commonly used types
pub use ranker::{rank, SimilaritySource};
pub use similarity::{common_ratings, cosine_similarity, MIN_COMMON_RATERS};
pub use types::{Candidate, GenreScope};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_creation() {
        let candidate = Candidate::new(1, "Heat (1995)", "Thriller", 0.85);
        assert_eq!(candidate.movie_id, 1);
        assert_eq!(candidate.title, "Heat (1995)");
        assert_eq!(candidate.similarity, 0.85);
    }

    #[test]
    fn test_genre_scope() {
        assert!(GenreScope::SameGenre.is_restricted());
        assert!(!GenreScope::AllGenres.is_restricted());
    }
}
