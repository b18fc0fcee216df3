//! Old/new row pairing for side-by-side rendering
//!
//! Diff producers emit every deletion of a change block before its
//! additions. The aligner buffers both runs and pairs them positionally:
//! `deletion[i]` sits next to `addition[i]`, leftovers get a row of their
//! own. Every input line lands in exactly one row, in input order.

use crate::artifacts::diff::file_diff::{DiffHunk, DiffLine, LineType};
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Context line shown on both sides
    Unchanged,
    /// A deletion paired with an addition
    Modified,
    /// Old side only
    Removed,
    /// New side only
    Added,
}

/// One rendered row of a two-panel view
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct AlignedDiffLine {
    /// Index of the owning hunk in [`crate::artifacts::diff::file_diff::FileDiff::hunks`]
    pub hunk_index: usize,
    pub old_line: Option<DiffLine>,
    pub new_line: Option<DiffLine>,
}

impl AlignedDiffLine {
    /// Classifies the row by which sides it carries
    ///
    /// A row with neither side has nothing to highlight and reads as
    /// [`RowKind::Unchanged`].
    pub fn kind(&self) -> RowKind {
        match (&self.old_line, &self.new_line) {
            (Some(old), Some(_)) if old.line_type == LineType::Context => RowKind::Unchanged,
            (Some(_), Some(_)) => RowKind::Modified,
            (Some(_), None) => RowKind::Removed,
            (None, Some(_)) => RowKind::Added,
            (None, None) => RowKind::Unchanged,
        }
    }
}

#[derive(Debug, Clone, new)]
pub struct LineAligner<'d> {
    hunks: &'d [DiffHunk],
}

impl LineAligner<'_> {
    /// Rows for all hunks, concatenated in hunk order
    pub fn align(&self) -> Vec<AlignedDiffLine> {
        let capacity = self.hunks.iter().map(|hunk| hunk.lines.len()).sum();
        let mut rows = Vec::with_capacity(capacity);

        for (hunk_index, hunk) in self.hunks.iter().enumerate() {
            Self::align_hunk(hunk_index, hunk, &mut rows);
        }

        rows
    }

    fn align_hunk(hunk_index: usize, hunk: &DiffHunk, rows: &mut Vec<AlignedDiffLine>) {
        let mut pending_deletions: Vec<&DiffLine> = Vec::new();
        let mut pending_additions: Vec<&DiffLine> = Vec::new();

        for line in &hunk.lines {
            match line.line_type {
                LineType::Context => {
                    Self::flush(
                        hunk_index,
                        &mut pending_deletions,
                        &mut pending_additions,
                        rows,
                    );
                    rows.push(AlignedDiffLine::new(
                        hunk_index,
                        Some(line.clone()),
                        Some(line.clone()),
                    ));
                }
                LineType::Deletion => pending_deletions.push(line),
                LineType::Addition => pending_additions.push(line),
            }
        }

        Self::flush(
            hunk_index,
            &mut pending_deletions,
            &mut pending_additions,
            rows,
        );
    }

    fn flush(
        hunk_index: usize,
        pending_deletions: &mut Vec<&DiffLine>,
        pending_additions: &mut Vec<&DiffLine>,
        rows: &mut Vec<AlignedDiffLine>,
    ) {
        let paired = pending_deletions.len().min(pending_additions.len());

        for (deletion, addition) in pending_deletions.iter().zip(pending_additions.iter()) {
            rows.push(AlignedDiffLine::new(
                hunk_index,
                Some((*deletion).clone()),
                Some((*addition).clone()),
            ));
        }

        for deletion in &pending_deletions[paired..] {
            rows.push(AlignedDiffLine::new(hunk_index, Some((*deletion).clone()), None));
        }

        for addition in &pending_additions[paired..] {
            rows.push(AlignedDiffLine::new(hunk_index, None, Some((*addition).clone())));
        }

        pending_deletions.clear();
        pending_additions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::hunk_header::HunkHeader;
    use crate::artifacts::diff::parser::parse_diff;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn hunk(lines: Vec<DiffLine>) -> DiffHunk {
        let mut hunk = DiffHunk::from_header(HunkHeader::new(1, 0, 1, 0, None));
        hunk.lines = lines;
        hunk
    }

    #[fixture]
    fn two_deletions_three_additions() -> Vec<DiffHunk> {
        vec![hunk(vec![
            DiffLine::deletion("d0", 1),
            DiffLine::deletion("d1", 2),
            DiffLine::addition("a0", 1),
            DiffLine::addition("a1", 2),
            DiffLine::addition("a2", 3),
        ])]
    }

    #[rstest]
    fn pairs_deletions_with_additions_then_emits_leftovers(
        two_deletions_three_additions: Vec<DiffHunk>,
    ) {
        let rows = LineAligner::new(&two_deletions_three_additions).align();
        let lines = &two_deletions_three_additions[0].lines;

        let expected = vec![
            AlignedDiffLine::new(0, Some(lines[0].clone()), Some(lines[2].clone())),
            AlignedDiffLine::new(0, Some(lines[1].clone()), Some(lines[3].clone())),
            AlignedDiffLine::new(0, None, Some(lines[4].clone())),
        ];
        assert_eq!(rows, expected);

        let kinds: Vec<_> = rows.iter().map(AlignedDiffLine::kind).collect();
        assert_eq!(
            kinds,
            vec![RowKind::Modified, RowKind::Modified, RowKind::Added]
        );
    }

    #[rstest]
    #[case(Some(DiffLine::context("x", 1, 1)), Some(DiffLine::context("x", 1, 1)), RowKind::Unchanged)]
    #[case(Some(DiffLine::deletion("x", 1)), Some(DiffLine::addition("y", 1)), RowKind::Modified)]
    #[case(Some(DiffLine::deletion("x", 1)), None, RowKind::Removed)]
    #[case(None, Some(DiffLine::addition("y", 1)), RowKind::Added)]
    #[case(None, None, RowKind::Unchanged)]
    fn classifies_rows_by_their_sides(
        #[case] old_line: Option<DiffLine>,
        #[case] new_line: Option<DiffLine>,
        #[case] expected: RowKind,
    ) {
        assert_eq!(AlignedDiffLine::new(0, old_line, new_line).kind(), expected);
    }

    #[test]
    fn surplus_deletions_become_old_only_rows() {
        let hunks = vec![hunk(vec![
            DiffLine::deletion("d0", 1),
            DiffLine::deletion("d1", 2),
            DiffLine::addition("a0", 1),
            DiffLine::context("c", 3, 2),
        ])];

        let kinds: Vec<_> = LineAligner::new(&hunks)
            .align()
            .iter()
            .map(AlignedDiffLine::kind)
            .collect();

        assert_eq!(
            kinds,
            vec![RowKind::Modified, RowKind::Removed, RowKind::Unchanged]
        );
    }

    #[test]
    fn context_line_splits_change_blocks() {
        let hunks = vec![hunk(vec![
            DiffLine::deletion("d0", 1),
            DiffLine::context("c", 2, 1),
            DiffLine::addition("a0", 2),
        ])];

        let kinds: Vec<_> = LineAligner::new(&hunks)
            .align()
            .iter()
            .map(AlignedDiffLine::kind)
            .collect();

        assert_eq!(
            kinds,
            vec![RowKind::Removed, RowKind::Unchanged, RowKind::Added]
        );
    }

    #[test]
    fn tags_rows_with_their_hunk() {
        let hunks = vec![
            hunk(vec![DiffLine::context("a", 1, 1), DiffLine::addition("b", 2)]),
            hunk(vec![DiffLine::deletion("c", 9)]),
        ];

        let indices: Vec<_> = LineAligner::new(&hunks)
            .align()
            .iter()
            .map(|row| row.hunk_index)
            .collect();

        assert_eq!(indices, vec![0, 0, 1]);
    }

    #[test]
    fn aligns_parsed_single_line_change() {
        let raw = "diff --git a/f b/f
--- a/f
+++ b/f
@@ -1,5 +1,5 @@
 1
 2
-old
+new
 4
 5
";
        let diff = parse_diff(raw);
        let rows = LineAligner::new(&diff.files[0].hunks).align();

        assert_eq!(rows.len(), 5);
        let kinds: Vec<_> = rows.iter().map(AlignedDiffLine::kind).collect();
        assert_eq!(
            kinds,
            vec![
                RowKind::Unchanged,
                RowKind::Unchanged,
                RowKind::Modified,
                RowKind::Unchanged,
                RowKind::Unchanged,
            ]
        );

        let modified = &rows[2];
        assert_eq!(modified.old_line, Some(DiffLine::deletion("old", 3)));
        assert_eq!(modified.new_line, Some(DiffLine::addition("new", 3)));
    }

    #[test]
    fn empty_hunks_produce_no_rows() {
        assert!(LineAligner::new(&[]).align().is_empty());
        assert!(LineAligner::new(&[hunk(Vec::new())]).align().is_empty());
    }

    fn line_strategy() -> impl Strategy<Value = Vec<LineType>> {
        prop::collection::vec(
            prop_oneof![
                Just(LineType::Context),
                Just(LineType::Addition),
                Just(LineType::Deletion)
            ],
            0..60,
        )
    }

    proptest! {
        #[test]
        fn prop_every_line_lands_in_exactly_one_row(types in line_strategy()) {
            let lines: Vec<DiffLine> = types
                .iter()
                .enumerate()
                .map(|(i, line_type)| match line_type {
                    LineType::Context => DiffLine::context(&i.to_string(), i, i),
                    LineType::Addition => DiffLine::addition(&i.to_string(), i),
                    LineType::Deletion => DiffLine::deletion(&i.to_string(), i),
                })
                .collect();
            let hunks = vec![hunk(lines.clone())];
            let rows = LineAligner::new(&hunks).align();

            let mut old_side = Vec::new();
            let mut new_side = Vec::new();
            for row in &rows {
                prop_assert!(row.old_line.is_some() || row.new_line.is_some());
                match row.kind() {
                    RowKind::Unchanged => old_side.push(row.old_line.clone()),
                    _ => {
                        if let Some(old) = &row.old_line {
                            old_side.push(Some(old.clone()));
                        }
                        if let Some(new) = &row.new_line {
                            new_side.push(Some(new.clone()));
                        }
                    }
                }
            }

            let expected_old: Vec<_> = lines
                .iter()
                .filter(|l| l.line_type != LineType::Addition)
                .cloned()
                .map(Some)
                .collect();
            let expected_new: Vec<_> = lines
                .iter()
                .filter(|l| l.line_type == LineType::Addition)
                .cloned()
                .map(Some)
                .collect();

            prop_assert_eq!(old_side, expected_old);
            prop_assert_eq!(new_side, expected_new);
        }
    }
}
