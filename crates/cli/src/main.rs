use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Catalog;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use recommender::{CatalogCache, RecommendConfig, Recommender, WalkOrder};
use serde_json::json;
use sources::{GenreScope, SimilaritySource};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// Movie Match - pick five movies from three you already liked
#[derive(Parser)]
#[command(name = "movie-match")]
#[command(about = "Item-item movie recommendations over a rating graph", long_about = None)]
struct Cli {
    /// Directory holding movies.csv and ratings.csv
    #[arg(short, long, default_value = "data/ml-latest-small")]
    data_dir: PathBuf,

    /// Explicit movies CSV (overrides --data-dir)
    #[arg(long, requires = "ratings")]
    movies: Option<PathBuf>,

    /// Explicit ratings CSV (overrides --data-dir)
    #[arg(long, requires = "movies")]
    ratings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend five movies from three watched titles
    Recommend {
        /// A watched title, exactly as listed (pass three times)
        #[arg(long = "watched", required = true, num_args = 1)]
        watched: Vec<String>,

        /// Seed for the final random draw
        #[arg(long)]
        seed: Option<u64>,

        /// Walk each ranking from its most similar end
        #[arg(long)]
        most_similar_first: bool,

        /// Accept at most this many titles per watched movie and pass
        #[arg(long)]
        per_movie_cap: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List titles containing a substring (case-insensitive)
    Search {
        /// Substring to look for; omit to list every title
        #[arg(long, default_value = "")]
        title: String,

        /// Maximum number of titles to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show the movies most similar to a title
    Similar {
        /// Title to rank against
        #[arg(long)]
        title: String,

        /// Only rank movies of the same genre
        #[arg(long)]
        same_genre: bool,

        /// Number of candidates to print
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Run concurrent recommendation requests and report latencies
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of requests in flight at once
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let cache = match (cli.movies, cli.ratings) {
        (Some(movies), Some(ratings)) => CatalogCache::new(movies, ratings),
        _ => CatalogCache::for_dir(&cli.data_dir),
    };

    let start = Instant::now();
    let catalog = cache
        .get_or_load()
        .context("Failed to load the movie catalog")?;
    let (users, movies, edges) = catalog.graph.counts();
    eprintln!(
        "{} Loaded {} movies, {} users, {} ratings in {:?}",
        "✓".green(),
        movies,
        users,
        edges,
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            watched,
            seed,
            most_similar_first,
            per_movie_cap,
            json,
        } => {
            let walk_order = if most_similar_first {
                WalkOrder::MostSimilarFirst
            } else {
                WalkOrder::LeastSimilarFirst
            };
            let config = RecommendConfig::new()
                .with_walk_order(walk_order)
                .with_per_movie_cap(per_movie_cap);
            handle_recommend(catalog, config, &watched, seed, json)?
        }
        Commands::Search { title, limit } => handle_search(&catalog, &title, limit),
        Commands::Similar {
            title,
            same_genre,
            limit,
        } => handle_similar(catalog, &title, same_genre, limit)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(catalog, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: Arc<Catalog>,
    config: RecommendConfig,
    watched: &[String],
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    // Always seeded, so any run can be replayed with --seed
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let recommender = Recommender::with_config(catalog, config);
    let picks = recommender
        .recommend(watched, &mut rng)
        .context("Could not build recommendations")?;

    if json {
        let output = json!({
            "watched": watched,
            "seed": seed,
            "recommendations": picks,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Because you watched:".bold().blue());
    for title in watched {
        println!("  {} {}", "•".cyan(), title);
    }
    println!("{}", "You might like:".bold().blue());
    for (rank, title) in picks.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), title);
    }
    println!("{}", format!("(seed {})", seed).dimmed());
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, query: &str, limit: usize) {
    let matches = catalog.titles.search(query);

    println!(
        "{}",
        format!("{} titles match '{}':", matches.len(), query).bold().blue()
    );
    for title in matches.iter().take(limit) {
        let genre = catalog
            .movie_by_title(title)
            .map(|movie| movie.genre.as_str())
            .unwrap_or("?");
        println!("  {} {} [{}]", "•".green(), title, genre);
    }
    if matches.len() > limit {
        println!("  ... and {} more", matches.len() - limit);
    }
}

/// Handle the 'similar' command
fn handle_similar(catalog: Arc<Catalog>, title: &str, same_genre: bool, limit: usize) -> Result<()> {
    let scope = if same_genre {
        GenreScope::SameGenre
    } else {
        GenreScope::AllGenres
    };
    let source = SimilaritySource::new(catalog);
    let Some(ranked) = source.rank_title(title, scope) else {
        bail!("Unknown title '{}'", title);
    };

    println!(
        "{}",
        format!("Most similar to '{}' ({} scored):", title, ranked.len())
            .bold()
            .blue()
    );
    // Rankings are ascending; read from the most similar end
    for (rank, candidate) in ranked.iter().rev().take(limit).enumerate() {
        println!(
            "{}. {} [{}] - similarity {:.4}",
            (rank + 1).to_string().green(),
            candidate.title,
            candidate.genre,
            candidate.similarity
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog: Arc<Catalog>, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    let titles = catalog.titles.titles().to_vec();
    if titles.len() < 3 {
        bail!("Catalog has only {} titles; need at least 3", titles.len());
    }

    // Random watched triples, drawn before any task is spawned
    let workloads: Vec<Vec<String>> = {
        let mut rng = rand::rng();
        (0..requests)
            .map(|_| titles.choose_multiple(&mut rng, 3).cloned().collect())
            .collect()
    };

    let recommender = Recommender::new(catalog);
    let semaphore = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();

    let mut handles = Vec::with_capacity(requests);
    for (i, watched) in workloads.into_iter().enumerate() {
        let recommender = recommender.clone();
        let permit = semaphore.clone().acquire_owned().await?;
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let mut rng = StdRng::seed_from_u64(i as u64);
            let start = Instant::now();
            let result = recommender.recommend(&watched, &mut rng);
            (start.elapsed(), result.is_ok())
        }));
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    let mut failures = 0usize;
    for handle in handles {
        let (elapsed, ok) = handle.await?;
        if !ok {
            failures += 1;
        }
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    if failures > 0 {
        warn!("{} of {} requests could not be served", failures, requests);
    }
    info!("Benchmark finished in {:?}", total_time);

    timings.sort();
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p).round() as usize];
    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} failed, {} concurrent)", requests, failures, concurrent);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}
