//! Shared test utilities.
//!
//! Fixture builders for metadata documents plus lookup helpers that panic
//! with the available slugs on a miss, so a failing test names what the
//! index actually holds.

use serde_json::{Value, json};
use std::path::{Path, PathBuf};

use crate::index::LocationIndex;

/// Minimal metadata document for a location name.
pub fn metadata_doc(name: &str) -> String {
    json!({"properties": {"name": name}}).to_string()
}

/// Write a metadata document into `dir` and return its path.
pub fn write_metadata(dir: &Path, filename: &str, name: &str) -> PathBuf {
    let path = dir.join(filename);
    std::fs::write(&path, metadata_doc(name)).unwrap();
    path
}

/// Look up an index entry by slug. Panics with the available slugs on a miss.
pub fn entry<'a>(index: &'a LocationIndex, slug: &str) -> &'a Value {
    index.get(slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = index.slugs().collect();
        panic!("slug '{slug}' not found. Available: {slugs:?}")
    })
}
