use crate::artifacts::cache::alignment_cache::{AlignedRows, AlignmentCache};
use crate::artifacts::cache::word_diff_cache::WordDiffCache;
use crate::artifacts::core::config::DiffConfig;
use crate::artifacts::diff::file_diff::{Diff, FileDiff};
use crate::artifacts::diff::line_aligner::RowKind;
use crate::artifacts::diff::parser::parse_diff;
use crate::artifacts::diff::split_row::SplitRow;
use crate::artifacts::diff::word_diff::{WordDiff, WordSegment};
use std::sync::Arc;

/// Entry point owning the configuration and both result caches
///
/// Construct one per view (or share it behind an `Arc`): every method takes
/// `&self` and the caches serialize their own access, so the engine can be
/// used from several threads at once.
#[derive(Debug)]
pub struct DiffEngine {
    config: DiffConfig,
    alignment_cache: AlignmentCache,
    word_diff_cache: WordDiffCache,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new(DiffConfig::default())
    }
}

impl DiffEngine {
    pub fn new(config: DiffConfig) -> Self {
        Self {
            alignment_cache: AlignmentCache::from_config(&config),
            word_diff_cache: WordDiffCache::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    pub fn alignment_cache(&self) -> &AlignmentCache {
        &self.alignment_cache
    }

    pub fn word_diff_cache(&self) -> &WordDiffCache {
        &self.word_diff_cache
    }

    pub fn parse(&self, raw: &str) -> Diff {
        parse_diff(raw)
    }

    pub fn align(&self, file: &FileDiff) -> AlignedRows {
        self.alignment_cache.get_or_align(file)
    }

    pub fn compare_words(&self, old: &str, new: &str) -> Arc<WordDiff> {
        self.word_diff_cache.get_or_compare(old, new, &self.config)
    }

    /// Aligned rows with word segments for every row
    ///
    /// Only modified rows go through the word diff cache; context rows are a
    /// single unchanged segment and one-sided rows a single changed one.
    pub fn split_view(&self, file: &FileDiff) -> Vec<SplitRow> {
        self.align(file)
            .iter()
            .map(|row| {
                let old = row.old_line.as_ref().map(|line| line.content.as_str());
                let new = row.new_line.as_ref().map(|line| line.content.as_str());

                let (old_segments, new_segments) = match (row.kind(), old, new) {
                    (RowKind::Modified, Some(old), Some(new)) => {
                        let diff = self.compare_words(old, new);
                        (diff.old.clone(), diff.new.clone())
                    }
                    (RowKind::Unchanged, Some(old), _) => (
                        vec![WordSegment::unchanged(old)],
                        vec![WordSegment::unchanged(old)],
                    ),
                    (_, old, new) => (one_sided(old), one_sided(new)),
                };

                SplitRow::new(row.clone(), old_segments, new_segments)
            })
            .collect()
    }

    pub fn clear_caches(&self) {
        self.alignment_cache.clear();
        self.word_diff_cache.clear();
        log::debug!("cleared alignment and word diff caches");
    }
}

fn one_sided(content: Option<&str>) -> Vec<WordSegment> {
    match content {
        Some(content) if !content.is_empty() => vec![WordSegment::changed(content)],
        _ => Vec::new(),
    }
}
