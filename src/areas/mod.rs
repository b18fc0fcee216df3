//! Long-lived components owned by the caller
//!
//! - `engine`: `DiffEngine`, which owns the configuration and both caches

pub mod engine;
