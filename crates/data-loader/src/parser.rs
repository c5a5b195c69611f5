//! Parser for the MovieLens CSV tables.
//!
//! - movies.csv: movieId,title,genres
//! - ratings.csv: userId,movieId,rating[,timestamp]
//!
//! Rows are deserialized straight into `MovieRow` / `RatingRow` with the csv
//! crate. The header row is checked once, before any data row is read, so a
//! renamed or missing column fails up front instead of on the first lookup.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Columns `movies.csv` must provide
pub const MOVIE_COLUMNS: [&str; 3] = ["movieId", "title", "genres"];

/// Columns `ratings.csv` must provide
pub const RATING_COLUMNS: [&str; 3] = ["userId", "movieId", "rating"];

/// Parse the movies table at `path`
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRow>> {
    let file = open(path)?;
    read_movies(file, &display_name(path))
}

/// Parse the ratings table at `path`
pub fn parse_ratings(path: &Path) -> Result<Vec<RatingRow>> {
    let file = open(path)?;
    read_ratings(file, &display_name(path))
}

/// Parse a movies table from any reader; `file` is only used in errors
pub fn read_movies<R: Read>(reader: R, file: &str) -> Result<Vec<MovieRow>> {
    read_table(reader, file, &MOVIE_COLUMNS)
}

/// Parse a ratings table from any reader; `file` is only used in errors
pub fn read_ratings<R: Read>(reader: R, file: &str) -> Result<Vec<RatingRow>> {
    read_table(reader, file, &RATING_COLUMNS)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_table<T, R>(reader: R, file: &str, required: &[&str]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| DataLoadError::CsvError {
            file: file.to_string(),
            source,
        })?
        .clone();
    validate_headers(&headers, file, required)?;

    let mut rows = Vec::new();
    for (idx, record) in csv_reader.deserialize::<T>().enumerate() {
        let row = record.map_err(|e| DataLoadError::ParseError {
            file: file.to_string(),
            // Header is line 1, so the first record is line 2
            line: e
                .position()
                .map(|pos| pos.line())
                .unwrap_or(idx as u64 + 2),
            reason: e.to_string(),
        })?;
        rows.push(row);
    }

    debug!("Parsed {} rows from {}", rows.len(), file);
    Ok(rows)
}

fn validate_headers(headers: &csv::StringRecord, file: &str, required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataLoadError::SchemaMismatch {
                file: file.to_string(),
                column: column.to_string(),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }
    }
    Ok(())
}
