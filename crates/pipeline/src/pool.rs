//! The candidate pool and the context filters read while it grows.

use std::collections::HashSet;

/// Titles accepted so far, in acceptance order, without duplicates.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    titles: Vec<String>,
    seen: HashSet<String>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `title` unless it is already pooled. Returns whether it was added.
    pub fn push(&mut self, title: &str) -> bool {
        if !self.seen.insert(title.to_string()) {
            return false;
        }
        self.titles.push(title.to_string());
        true
    }

    pub fn contains(&self, title: &str) -> bool {
        self.seen.contains(title)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn into_titles(self) -> Vec<String> {
        self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// What a filter may consult: the watched titles and the pool built so far.
#[derive(Debug, Clone, Default)]
pub struct PoolContext {
    pub watched: HashSet<String>,
    pub pool: CandidatePool,
}

impl PoolContext {
    pub fn new<I, S>(watched: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            watched: watched.into_iter().map(Into::into).collect(),
            pool: CandidatePool::new(),
        }
    }

    /// `true` if `title` is watched or already pooled
    pub fn excludes(&self, title: &str) -> bool {
        self.watched.contains(title) || self.pool.contains(title)
    }
}
