//! Catalog construction: rating graph plus title index.
//!
//! Building a catalog is the only place the graph is mutated. Once built it
//! is read-only and can be shared (`Arc<Catalog>`) by any number of
//! recommendation requests.

use crate::error::Result;
use crate::genre::normalize_genre;
use crate::graph::RatingGraph;
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// File name of the movies table inside a data directory
pub const MOVIES_FILE: &str = "movies.csv";

/// File name of the ratings table inside a data directory
pub const RATINGS_FILE: &str = "ratings.csv";

/// Maps display titles to movies and remembers the order titles were seen.
///
/// Titles are not guaranteed unique across ids in MovieLens. When two rows
/// share a title, the later row owns the lookup entry while the ordered list
/// keeps a single copy at the position of the first.
#[derive(Debug, Default, Clone)]
pub struct TitleIndex {
    by_title: HashMap<String, MovieId>,
    titles: Vec<String>,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `title` for `movie_id`
    pub fn insert(&mut self, title: &str, movie_id: MovieId) {
        if self.by_title.insert(title.to_string(), movie_id).is_none() {
            self.titles.push(title.to_string());
        }
    }

    /// Movie id registered for an exact title
    pub fn lookup(&self, title: &str) -> Option<MovieId> {
        self.by_title.get(title).copied()
    }

    /// All distinct titles, in first-seen order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Case-insensitive substring search over the ordered titles.
    ///
    /// An empty query matches everything, which is how the search box lists
    /// the full catalog before the user has typed anything.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.titles
            .iter()
            .filter(|title| query.is_empty() || title.to_lowercase().contains(&query))
            .map(|title| title.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// A rating graph together with the title index built alongside it.
#[derive(Debug, Default)]
pub struct Catalog {
    pub graph: RatingGraph,
    pub titles: TitleIndex,
}

impl Catalog {
    /// Build a catalog from already-parsed rows.
    ///
    /// Steps:
    /// 1. Add every movie (with its normalized genre) and register its title
    /// 2. For every rating, add the user if needed, then the rating edge
    ///
    /// A rating for a movie id absent from `movies` fails with
    /// `DataLoadError::MissingVertex`; the tables are expected to agree.
    pub fn build(movies: &[MovieRow], ratings: &[RatingRow]) -> Result<Self> {
        let mut graph = RatingGraph::new();
        let mut titles = TitleIndex::new();

        for row in movies {
            graph.add_movie(row.movie_id, row.title.as_str(), normalize_genre(&row.genres));
            titles.insert(&row.title, row.movie_id);
        }

        for row in ratings {
            graph.add_user(row.user_id);
            graph.add_edge(row.user_id, row.movie_id, row.rating)?;
        }

        let (users, movie_count, edges) = graph.counts();
        debug!(
            "Built rating graph: {} users, {} movies, {} edges, {} titles",
            users,
            movie_count,
            edges,
            titles.len()
        );

        Ok(Self { graph, titles })
    }

    /// Load `movies.csv` and `ratings.csv` from a directory
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        Self::load(&data_dir.join(MOVIES_FILE), &data_dir.join(RATINGS_FILE))
    }

    /// Load a catalog from explicit table paths.
    ///
    /// Both files are parsed in parallel with `rayon::join`, then the graph
    /// is built on the calling thread.
    pub fn load(movies_path: &Path, ratings_path: &Path) -> Result<Self> {
        info!(
            "Loading movies from {:?} and ratings from {:?}",
            movies_path, ratings_path
        );

        let (movies, ratings) = rayon::join(
            || parser::parse_movies(movies_path),
            || parser::parse_ratings(ratings_path),
        );
        let movies = movies?;
        let ratings = ratings?;

        info!("Parsed {} movies, {} ratings", movies.len(), ratings.len());

        let catalog = Self::build(&movies, &ratings)?;
        info!("Catalog built with {} titles", catalog.titles.len());
        Ok(catalog)
    }

    /// Resolve a title to its movie vertex
    pub fn movie_by_title(&self, title: &str) -> Option<&Movie> {
        self.titles
            .lookup(title)
            .and_then(|id| self.graph.get_movie(id).ok())
    }
}
