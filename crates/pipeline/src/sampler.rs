//! Final selection: a uniform sample without replacement.

use crate::error::{RecommendError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Draw `count` distinct titles uniformly at random from `pool`.
///
/// The random source is injected so callers (and tests) can seed it.
/// A pool smaller than `count` is an error rather than a short answer.
pub fn sample_titles<R>(pool: &[String], count: usize, rng: &mut R) -> Result<Vec<String>>
where
    R: Rng + ?Sized,
{
    if pool.len() < count {
        return Err(RecommendError::InsufficientCandidates {
            needed: count,
            available: pool.len(),
        });
    }
    Ok(pool.choose_multiple(rng, count).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn pool(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Movie {}", i)).collect()
    }

    #[test]
    fn test_sample_is_distinct_subset() {
        let pool = pool(12);
        let mut rng = StdRng::seed_from_u64(7);

        let picked = sample_titles(&pool, 5, &mut rng).unwrap();
        let unique: HashSet<&String> = picked.iter().collect();

        assert_eq!(picked.len(), 5);
        assert_eq!(unique.len(), 5);
        assert!(picked.iter().all(|t| pool.contains(t)));
    }

    #[test]
    fn test_same_seed_same_sample() {
        let pool = pool(20);
        let a = sample_titles(&pool, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = sample_titles(&pool, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exact_size_pool_returns_everything() {
        let pool = pool(5);
        let picked = sample_titles(&pool, 5, &mut StdRng::seed_from_u64(1)).unwrap();
        let picked: HashSet<String> = picked.into_iter().collect();
        let expected: HashSet<String> = pool.into_iter().collect();
        assert_eq!(picked, expected);
    }

    #[test]
    fn test_insufficient_candidates() {
        let err = sample_titles(&pool(4), 5, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(
            err,
            RecommendError::InsufficientCandidates {
                needed: 5,
                available: 4
            }
        ));
    }
}
