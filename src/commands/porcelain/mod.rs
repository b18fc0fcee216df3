//! User-facing commands
//!
//! ## Commands
//!
//! - `files`: one summary line per file in a diff
//! - `split`: side-by-side rows with word-level highlighting
//! - `words`: word diff of two strings

pub mod files;
pub mod split;
pub mod words;
