use crate::artifacts::cache::BoundedCache;
use crate::artifacts::core::config::DiffConfig;
use crate::artifacts::diff::file_diff::FileDiff;
use crate::artifacts::diff::line_aligner::{AlignedDiffLine, LineAligner};
use std::sync::Arc;

/// Structural fingerprint of a file diff: identity plus shape, not content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlignmentKey {
    old_path: String,
    new_path: String,
    display_path: String,
    hunk_count: usize,
    line_count: usize,
}

impl AlignmentKey {
    pub fn for_file(file: &FileDiff) -> Self {
        Self {
            old_path: file.old_path.clone(),
            new_path: file.new_path.clone(),
            display_path: file.display_path().to_string(),
            hunk_count: file.hunks.len(),
            line_count: file.line_count(),
        }
    }
}

pub type AlignedRows = Arc<Vec<AlignedDiffLine>>;

/// Memoized [`LineAligner`] output per file
///
/// Two diffs of the same file with equal hunk and line counts share an
/// entry; call [`AlignmentCache::clear`] when the underlying diff is reloaded.
#[derive(Debug)]
pub struct AlignmentCache {
    inner: BoundedCache<AlignmentKey, Vec<AlignedDiffLine>>,
}

impl AlignmentCache {
    pub fn new(capacity: usize, evict: usize) -> Self {
        Self {
            inner: BoundedCache::new("alignment", capacity, evict),
        }
    }

    pub fn from_config(config: &DiffConfig) -> Self {
        Self::new(config.alignment_cache_capacity, config.alignment_cache_evict)
    }

    pub fn get_or_align(&self, file: &FileDiff) -> AlignedRows {
        self.inner.get_or_insert_with(AlignmentKey::for_file(file), || {
            LineAligner::new(&file.hunks).align()
        })
    }

    pub fn contains(&self, file: &FileDiff) -> bool {
        self.inner.contains(&AlignmentKey::for_file(file))
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
