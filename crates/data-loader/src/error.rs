//! Error types for the data-loader crate.
//!
//! Every failure of loading the CSV tables or mutating the rating graph
//! is one variant of [`DataLoadError`]. Callers higher up (the
//! recommendation pipeline, the CLI) wrap it rather than re-classifying it.

use thiserror::Error;

/// Errors that can occur while loading data or building the rating graph
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader itself failed (bad quoting, invalid UTF-8, ...)
    #[error("CSV error in {file}: {source}")]
    CsvError {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// The header row does not carry a column the typed row needs
    #[error("Schema mismatch in {file}: missing column '{column}' (found: {found})")]
    SchemaMismatch {
        file: String,
        column: String,
        found: String,
    },

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// An edge or lookup referenced a user or movie that is not in the graph
    #[error("Missing vertex: {entity} with id {id}")]
    MissingVertex { entity: String, id: u32 },
}

impl DataLoadError {
    pub(crate) fn missing_user(id: u32) -> Self {
        DataLoadError::MissingVertex {
            entity: "User".to_string(),
            id,
        }
    }

    pub(crate) fn missing_movie(id: u32) -> Self {
        DataLoadError::MissingVertex {
            entity: "Movie".to_string(),
            id,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
