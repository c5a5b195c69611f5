//! Cache of one loaded catalog, keyed by the identity of its input files.
//!
//! Loading parses both CSV tables and builds the whole graph, so it should
//! happen once and be reused across recommendation requests. The cache
//! reloads when either file's path, length or modification time changes,
//! and can be invalidated explicitly.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use data_loader::index::{MOVIES_FILE, RATINGS_FILE};
use data_loader::{Catalog, DataLoadError, Result};
use tracing::{debug, info};

/// Identity of one input file at the moment it was read
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileStamp {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
}

impl FileStamp {
    fn read(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            len: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }
}

/// Fingerprint of both tables a catalog was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFingerprint {
    movies: FileStamp,
    ratings: FileStamp,
}

impl SourceFingerprint {
    pub fn read(movies_path: &Path, ratings_path: &Path) -> Result<Self> {
        Ok(Self {
            movies: FileStamp::read(movies_path)?,
            ratings: FileStamp::read(ratings_path)?,
        })
    }
}

/// Single-writer/multiple-reader cache of one `Catalog`.
///
/// Readers get a shared `Arc<Catalog>`; a reload swaps the entry under the
/// write lock, so requests already holding the old catalog keep using it
/// until they finish.
pub struct CatalogCache {
    movies_path: PathBuf,
    ratings_path: PathBuf,
    entry: RwLock<Option<(SourceFingerprint, Arc<Catalog>)>>,
}

impl CatalogCache {
    pub fn new(movies_path: impl Into<PathBuf>, ratings_path: impl Into<PathBuf>) -> Self {
        Self {
            movies_path: movies_path.into(),
            ratings_path: ratings_path.into(),
            entry: RwLock::new(None),
        }
    }

    /// Cache for `movies.csv` / `ratings.csv` inside `data_dir`
    pub fn for_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(MOVIES_FILE), data_dir.join(RATINGS_FILE))
    }

    /// Return the cached catalog, loading it first if the files changed or
    /// nothing is cached yet
    pub fn get_or_load(&self) -> Result<Arc<Catalog>> {
        let fingerprint = SourceFingerprint::read(&self.movies_path, &self.ratings_path)?;

        {
            let guard = self.entry.read().unwrap_or_else(PoisonError::into_inner);
            if let Some((cached, catalog)) = guard.as_ref() {
                if *cached == fingerprint {
                    debug!("Catalog cache hit");
                    return Ok(catalog.clone());
                }
                info!("Input files changed, reloading catalog");
            }
        }

        let mut guard = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        // Another writer may have loaded the same files while we waited
        if let Some((cached, catalog)) = guard.as_ref() {
            if *cached == fingerprint {
                return Ok(catalog.clone());
            }
        }

        let catalog = Arc::new(Catalog::load(&self.movies_path, &self.ratings_path)?);
        *guard = Some((fingerprint, catalog.clone()));
        Ok(catalog)
    }

    /// Drop the cached catalog; the next `get_or_load` reads the files again
    pub fn invalidate(&self) {
        let mut guard = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            debug!("Catalog cache invalidated");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.entry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
