//! Unified diff model and algorithms
//!
//! - `hunk_header`: `@@ -a,b +c,d @@` parsing
//! - `body_line`: prefix classification of hunk body lines
//! - `file_diff`: the parsed model (`Diff`, `FileDiff`, `DiffHunk`, `DiffLine`)
//! - `parser`: raw text to `Diff`
//! - `line_aligner`: old/new row pairing for side-by-side display
//! - `lcs`: exact and approximate longest common subsequence
//! - `word_diff`: word-level segments for a changed line pair
//! - `split_row`: aligned rows combined with their word segments

pub mod body_line;
pub mod file_diff;
pub mod hunk_header;
pub mod lcs;
pub mod line_aligner;
pub mod parser;
pub mod split_row;
pub mod word_diff;
