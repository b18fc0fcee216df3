//! Size-bounded memoization for alignment and word diff results
//!
//! Both caches share [`BoundedCache`]: a `HashMap` behind a single
//! `parking_lot::Mutex`. Values are computed outside the lock and inserted in
//! one locked step, so a reader sees either no entry or a complete one. When
//! two callers race on the same key the first insert wins and both get the
//! stored value.
//!
//! Overflow drops a block of entries in map iteration order; there is no
//! recency tracking and no time-based expiry.

pub mod alignment_cache;
pub mod word_diff_cache;

use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

#[derive(Debug)]
pub struct BoundedCache<K, V> {
    name: &'static str,
    capacity: usize,
    evict: usize,
    entries: Mutex<HashMap<K, Arc<V>>>,
}

impl<K: Eq + Hash + Clone, V> BoundedCache<K, V> {
    pub fn new(name: &'static str, capacity: usize, evict: usize) -> Self {
        Self {
            name,
            capacity,
            evict,
            entries: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }

    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries.lock().get(key).cloned()
    }

    /// Stores `value` unless `key` is already present; returns the stored value
    pub fn insert(&self, key: K, value: V) -> Arc<V> {
        if self.capacity == 0 {
            return Arc::new(value);
        }

        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(&key) {
            return Arc::clone(existing);
        }

        if entries.len() >= self.capacity {
            let evict = self.evict.clamp(1, entries.len());
            let victims: Vec<K> = entries.keys().take(evict).cloned().collect();
            for victim in &victims {
                entries.remove(victim);
            }
            log::debug!(
                "{} cache full ({} entries), evicted {}",
                self.name,
                self.capacity,
                victims.len()
            );
        }

        let value = Arc::new(value);
        entries.insert(key, Arc::clone(&value));
        value
    }

    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> Arc<V> {
        if let Some(hit) = self.get(&key) {
            log::trace!("{} cache hit", self.name);
            return hit;
        }

        log::trace!("{} cache miss", self.name);
        self.insert(key, compute())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
