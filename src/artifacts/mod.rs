//! Diff data structures, algorithms and caches
//!
//! - `cache`: bounded memoization of alignment and word diff results
//! - `core`: configuration and output plumbing
//! - `diff`: the diff model, parser, aligner and word differ

pub mod cache;
pub mod core;
pub mod diff;
