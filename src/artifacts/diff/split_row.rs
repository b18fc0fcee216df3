use crate::artifacts::diff::line_aligner::{AlignedDiffLine, RowKind};
use crate::artifacts::diff::word_diff::WordSegment;
use derive_new::new;

/// An aligned row plus the word segments to render on each side
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SplitRow {
    pub row: AlignedDiffLine,
    pub old_segments: Vec<WordSegment>,
    pub new_segments: Vec<WordSegment>,
}

impl SplitRow {
    pub fn kind(&self) -> RowKind {
        self.row.kind()
    }
}
