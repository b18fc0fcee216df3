use crate::artifacts::cache::BoundedCache;
use crate::artifacts::core::config::DiffConfig;
use crate::artifacts::diff::word_diff::{WordDiff, compare_words};
use sha1::{Digest, Sha1};
use std::sync::Arc;

/// SHA-1 over the length-prefixed old string followed by the new string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordDiffKey([u8; 20]);

impl WordDiffKey {
    pub fn for_pair(old: &str, new: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update((old.len() as u64).to_le_bytes());
        hasher.update(old.as_bytes());
        hasher.update(new.as_bytes());

        Self(hasher.finalize().into())
    }
}

/// Memoized [`compare_words`] results keyed by the input pair
#[derive(Debug)]
pub struct WordDiffCache {
    inner: BoundedCache<WordDiffKey, WordDiff>,
}

impl WordDiffCache {
    pub fn new(capacity: usize, evict: usize) -> Self {
        Self {
            inner: BoundedCache::new("word diff", capacity, evict),
        }
    }

    pub fn from_config(config: &DiffConfig) -> Self {
        Self::new(config.word_diff_cache_capacity, config.word_diff_cache_evict)
    }

    pub fn get_or_compare(&self, old: &str, new: &str, config: &DiffConfig) -> Arc<WordDiff> {
        self.inner
            .get_or_insert_with(WordDiffKey::for_pair(old, new), || {
                compare_words(old, new, config)
            })
    }

    pub fn contains(&self, old: &str, new: &str) -> bool {
        self.inner.contains(&WordDiffKey::for_pair(old, new))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&self) {
        self.inner.clear();
    }
}
