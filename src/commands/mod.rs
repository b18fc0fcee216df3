//! CLI command implementations
//!
//! Commands are `impl DiffEngine` blocks that render parsed diffs to an
//! injected writer, so tests can capture their output.

pub mod porcelain;
