//! Deterministic JSON serialization for the state file.
//!
//! Keeps the file stable between writes by:
//! - Sorting object keys (via `BTreeMap` in the stored map)
//! - Using 2-space indentation
//! - Adding a trailing newline

mod json;

pub use json::*;
