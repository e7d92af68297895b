//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::build_index;
use crate::types::{DocumentRecord, SearchIndex};

/// Create a test record with the given text; url is `/posts/<id>/`.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: &str, title: &str, content: &str) -> DocumentRecord {
    DocumentRecord {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        summary: None,
        url: format!("/posts/{}/", id),
        tags: vec![],
        categories: vec![],
        date: None,
        section: Some("posts".to_string()),
        kind: Some("post".to_string()),
    }
}

/// Create a test record with an explicit url.
pub fn make_record_at(id: &str, title: &str, content: &str, url: &str) -> DocumentRecord {
    DocumentRecord {
        url: url.to_string(),
        ..make_record(id, title, content)
    }
}

/// Build an index from `(title, content)` pairs; ids are `doc0`, `doc1`, ...
pub fn make_index(docs: &[(&str, &str)]) -> SearchIndex {
    build_index(
        docs.iter()
            .enumerate()
            .map(|(i, (title, content))| make_record(&format!("doc{}", i), title, content))
            .collect(),
    )
}

/// Serialize records the way Hugo's index template would.
pub fn catalog_json(records: &[DocumentRecord]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}
