//! Filter to keep each title at most once across the whole pool.

use crate::error::Result;
use crate::pool::PoolContext;
use crate::traits::Filter;
use sources::Candidate;
use std::collections::HashSet;

/// Removes candidates already in the pool, and repeats within the ranking.
///
/// A repeated title inside one ranking (distinct ids, same title) keeps
/// its first occurrence in walk order.
pub struct AlreadyPooledFilter;

impl Filter for AlreadyPooledFilter {
    fn name(&self) -> &str {
        "AlreadyPooledFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &PoolContext) -> Result<Vec<Candidate>> {
        let mut seen: HashSet<String> = HashSet::new();
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                !context.pool.contains(&candidate.title) && seen.insert(candidate.title.clone())
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_pooled_filter() {
        let mut context = PoolContext::new(Vec::<String>::new());
        context.pool.push("Casino (1995)");

        let candidates = vec![
            Candidate::new(1, "Casino (1995)", "Crime", 0.2),
            Candidate::new(2, "Hamlet (2000)", "Drama", 0.3),
            Candidate::new(3, "Hamlet (2000)", "Drama", 0.4),
            Candidate::new(4, "Emma (1996)", "Romance", 0.5),
        ];

        let filtered = AlreadyPooledFilter.apply(candidates, &context).unwrap();

        let ids: Vec<u32> = filtered.iter().map(|c| c.movie_id).collect();
        assert_eq!(ids, vec![2, 4]);
    }
}
