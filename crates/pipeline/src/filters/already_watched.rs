//! Filter to remove the movies the user said they watched.

use crate::error::Result;
use crate::pool::PoolContext;
use crate::traits::Filter;
use sources::Candidate;

/// Removes candidates whose title is one of the watched titles.
///
/// Matching is by title, not id: two catalog entries sharing a watched
/// title are both excluded.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &PoolContext) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| !context.watched.contains(&candidate.title))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_watched_filter() {
        let context = PoolContext::new(["Heat (1995)", "Alien (1979)"]);

        let candidates = vec![
            Candidate::new(100, "Heat (1995)", "Thriller", 0.9),
            Candidate::new(101, "Casino (1995)", "Crime", 0.8),
            Candidate::new(200, "Alien (1979)", "Horror", 0.7),
            Candidate::new(300, "Ronin (1998)", "Action", 0.6),
        ];

        let filter = AlreadyWatchedFilter;
        let filtered = filter.apply(candidates, &context).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].movie_id, 101);
        assert_eq!(filtered[1].movie_id, 300);
    }
}
