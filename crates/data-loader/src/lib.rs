//! # Data Loader Crate
//!
//! This crate loads the MovieLens CSV tables and builds the rating graph
//! every other crate reads from.
//!
//! ## Main Components
//!
//! - **types**: Typed CSV rows and graph vertices (User, Movie)
//! - **genre**: Reduce a pipe-delimited genre list to one label
//! - **graph**: The bipartite `RatingGraph` with mirrored rating edges
//! - **parser**: Parse movies.csv / ratings.csv with header validation
//! - **index**: Build a `Catalog` (graph + `TitleIndex`) from rows or files
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("data/ml-latest-small"))?;
//!
//! let movie = catalog.movie_by_title("Toy Story (1995)").unwrap();
//! println!("{} [{}] rated by {} users", movie.title, movie.genre, movie.rating_count());
//! ```

// Public modules
pub mod error;
pub mod genre;
pub mod graph;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use genre::normalize_genre;
pub use graph::RatingGraph;
pub use index::{Catalog, TitleIndex};
pub use types::{
    // Type aliases
    MovieId,
    UserId,
    // Core types
    Movie,
    MovieRow,
    RatingRow,
    User,
};
