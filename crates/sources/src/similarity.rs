//! Item-item cosine similarity over common raters.
//!
//! Two movies are compared only on the users who rated both. Each movie's
//! ratings are kept in a map ordered by user id, so the common raters are
//! found with a single merge walk and come out in the same order whichever
//! movie is passed first. That makes the result exactly symmetric.

use data_loader::Movie;
use std::cmp::Ordering;

/// Fewer shared raters than this and the similarity is undefined
pub const MIN_COMMON_RATERS: usize = 2;

/// Ratings the common raters gave to `a` and `b`, ordered by user id.
pub fn common_ratings(a: &Movie, b: &Movie) -> Vec<(f32, f32)> {
    let mut left = a.ratings().iter().peekable();
    let mut right = b.ratings().iter().peekable();
    let mut pairs = Vec::new();

    while let (Some(&(ua, ra)), Some(&(ub, rb))) = (left.peek(), right.peek()) {
        match ua.cmp(ub) {
            Ordering::Less => {
                left.next();
            }
            Ordering::Greater => {
                right.next();
            }
            Ordering::Equal => {
                pairs.push((*ra, *rb));
                left.next();
                right.next();
            }
        }
    }
    pairs
}

/// Cosine similarity between two movies' rating vectors.
///
/// Returns `None` when:
/// - `a` and `b` are the same movie
/// - they share fewer than [`MIN_COMMON_RATERS`] raters
/// - either vector has zero norm (all shared ratings are 0)
///
/// Formula: cos(θ) = (A · B) / (||A|| ||B||)
pub fn cosine_similarity(a: &Movie, b: &Movie) -> Option<f64> {
    if a.id == b.id {
        return None;
    }

    let pairs = common_ratings(a, b);
    if pairs.len() < MIN_COMMON_RATERS {
        return None;
    }

    let (dot, sq_a, sq_b) = pairs.iter().fold((0.0, 0.0, 0.0), |(dot, sq_a, sq_b), &(x, y)| {
        let (x, y) = (x as f64, y as f64);
        (dot + x * y, sq_a + x * x, sq_b + y * y)
    });

    let norm_a = sq_a.sqrt();
    let norm_b = sq_b.sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    Some(dot / (norm_a * norm_b))
}
