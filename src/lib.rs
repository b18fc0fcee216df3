//! Unified diff parsing, side-by-side alignment and word-level highlighting
//!
//! ```rust
//! use diffkit::areas::engine::DiffEngine;
//!
//! let engine = DiffEngine::default();
//! let diff = engine.parse("diff --git a/f b/f\n--- a/f\n+++ b/f\n@@ -1 +1 @@\n-old\n+new\n");
//! let rows = engine.split_view(&diff.files[0]);
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].new_segments[0].text, "new");
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
