//! Filter capping how many titles one watched movie contributes.

use crate::error::Result;
use crate::pool::PoolContext;
use crate::traits::Filter;
use sources::Candidate;

/// Keeps the first `cap` candidates of a ranking.
///
/// Must run after the exclusion filters so the cap counts accepted titles,
/// not titles that were going to be skipped anyway.
pub struct PerMovieCapFilter {
    cap: usize,
}

impl PerMovieCapFilter {
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }
}

impl Filter for PerMovieCapFilter {
    fn name(&self) -> &str {
        "PerMovieCapFilter"
    }

    fn apply(&self, mut candidates: Vec<Candidate>, _context: &PoolContext) -> Result<Vec<Candidate>> {
        candidates.truncate(self.cap);
        Ok(candidates)
    }
}
