//! Benchmarks for candidate ranking
//!
//! Run with: cargo bench --package sources
//!
//! Uses a synthetic catalog so the benchmark runs without the dataset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Catalog, MovieRow, RatingRow};
use sources::{cosine_similarity, GenreScope, SimilaritySource};
use std::sync::Arc;

const MOVIES: u32 = 2_000;
const USERS: u32 = 600;
const GENRES: [&str; 4] = ["Comedy", "Drama|Horror", "Action|Crime", "Adventure|Children"];

fn synthetic_catalog() -> Arc<Catalog> {
    let movies: Vec<MovieRow> = (1..=MOVIES)
        .map(|id| MovieRow {
            movie_id: id,
            title: format!("Movie {}", id),
            genres: GENRES[id as usize % GENRES.len()].to_string(),
        })
        .collect();

    // Each user rates roughly one movie in seven, scores cycle through 0.5..=5.0
    let ratings: Vec<RatingRow> = (1..=USERS)
        .flat_map(|user_id| {
            (1..=MOVIES)
                .filter(move |movie_id| (movie_id * 31 + user_id * 17) % 7 == 0)
                .map(move |movie_id| RatingRow {
                    user_id,
                    movie_id,
                    rating: ((movie_id + user_id) % 10 + 1) as f32 / 2.0,
                })
        })
        .collect();

    Arc::new(Catalog::build(&movies, &ratings).expect("synthetic catalog is consistent"))
}

fn bench_cosine_similarity(c: &mut Criterion) {
    let catalog = synthetic_catalog();
    let a = catalog.graph.get_movie(1).expect("movie 1 exists");
    let b = catalog.graph.get_movie(2).expect("movie 2 exists");

    c.bench_function("cosine_similarity", |bench| {
        bench.iter(|| black_box(cosine_similarity(black_box(a), black_box(b))))
    });
}

fn bench_rank_same_genre(c: &mut Criterion) {
    let catalog = synthetic_catalog();
    let source = SimilaritySource::new(catalog.clone());
    let movie = catalog.graph.get_movie(1).expect("movie 1 exists");

    c.bench_function("rank_same_genre", |b| {
        b.iter(|| black_box(source.rank(black_box(movie), GenreScope::SameGenre)))
    });
}

fn bench_rank_all_genres(c: &mut Criterion) {
    let catalog = synthetic_catalog();
    let source = SimilaritySource::new(catalog.clone());
    let movie = catalog.graph.get_movie(1).expect("movie 1 exists");

    c.bench_function("rank_all_genres", |b| {
        b.iter(|| black_box(source.rank(black_box(movie), GenreScope::AllGenres)))
    });
}

criterion_group!(
    benches,
    bench_cosine_similarity,
    bench_rank_same_genre,
    bench_rank_all_genres
);
criterion_main!(benches);
