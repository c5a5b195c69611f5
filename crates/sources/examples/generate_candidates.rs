//! Example: Rank candidates for one movie
//!
//! Run with: cargo run --package sources --example generate_candidates -- "Toy Story (1995)"
//!
//! This example shows how to:
//! 1. Load the MovieLens dataset
//! 2. Rank same-genre candidates
//! 3. Rank candidates across all genres
//! 4. Display both ends of the ascending ranking

use anyhow::anyhow;
use data_loader::Catalog;
use sources::{Candidate, GenreScope, SimilaritySource};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    let title = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Toy Story (1995)".to_string());

    println!("=== Movie Match Candidate Ranking Example ===\n");

    println!("Loading MovieLens dataset...");
    let start = Instant::now();
    let catalog = Arc::new(Catalog::load_from_files(Path::new("data/ml-latest-small"))?);
    println!("Loaded dataset in {:?}\n", start.elapsed());

    let movie = catalog
        .movie_by_title(&title)
        .ok_or_else(|| anyhow!("Title '{}' not found", title))?;
    println!("Target: {} [{}], {} ratings\n", movie.title, movie.genre, movie.rating_count());

    let source = SimilaritySource::new(catalog.clone());

    for scope in [GenreScope::SameGenre, GenreScope::AllGenres] {
        let start = Instant::now();
        let ranked = source.rank(movie, scope);
        println!("{:?}: {} candidates in {:?}", scope, ranked.len(), start.elapsed());
        print_ends(&ranked);
        println!();
    }

    Ok(())
}

fn print_ends(ranked: &[Candidate]) {
    println!("  Least similar (head):");
    for c in ranked.iter().take(3) {
        println!("    {:.3}  {} [{}]", c.similarity, c.title, c.genre);
    }
    println!("  Most similar (tail):");
    for c in ranked.iter().rev().take(3) {
        println!("    {:.3}  {} [{}]", c.similarity, c.title, c.genre);
    }
}
