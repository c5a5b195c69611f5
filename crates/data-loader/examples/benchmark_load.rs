use anyhow::Context;
use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let data_dir = Path::new("data/ml-latest-small");

    println!("Loading MovieLens dataset...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_files(data_dir).context("Failed to load dataset")?;
    let elapsed = start.elapsed();

    let (users, movies, ratings) = catalog.graph.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Users: {}", users);
    println!("Movies: {}", movies);
    println!("Ratings: {}", ratings);
    println!("Distinct titles: {}", catalog.titles.len());
    println!(
        "\nPerformance: {:.0} ratings/second",
        ratings as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}
