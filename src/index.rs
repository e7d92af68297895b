// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search index construction.
//!
//! One pass over the catalog: normalize each record's text and split out the
//! title and content words the per-word matcher needs. The result is immutable;
//! a reload builds a new index from scratch rather than patching the old one.
//!
//! # Invariants
//!
//! 1. **ONE_ENTRY_PER_RECORD**: `index.entries[i]` is built from `records[i]`,
//!    so entry position is catalog order (the ranking tie-break relies on it).
//! 2. **DERIVED_FIELDS**: `search_text`, `title_words` and `content_words` are
//!    pure functions of the record.

use crate::types::{DocumentRecord, IndexEntry, SearchIndex};
use crate::utils::{normalize, words};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Derive the searchable forms of one record.
///
/// `search_text` is `title content tags categories`, normalized as a whole so
/// the whole-text match sees one continuous haystack.
pub fn build_entry(record: DocumentRecord) -> IndexEntry {
    let title = normalize(&record.title);
    let content = normalize(&record.content);

    let mut haystack = String::with_capacity(
        record.title.len() + record.content.len() + 2,
    );
    haystack.push_str(&record.title);
    haystack.push(' ');
    haystack.push_str(&record.content);
    for label in record.tags.iter().chain(record.categories.iter()) {
        haystack.push(' ');
        haystack.push_str(label);
    }

    IndexEntry {
        search_text: normalize(&haystack),
        title_words: words(&title),
        title_text: title,
        content_words: words(&content),
        record,
    }
}

/// Build the index for one page load.
///
/// Preserves catalog order. With the `parallel` feature large catalogs are
/// tokenized on the rayon pool; the output is identical either way.
pub fn build_index(records: Vec<DocumentRecord>) -> SearchIndex {
    #[cfg(feature = "parallel")]
    let entries: Vec<IndexEntry> = records.into_par_iter().map(build_entry).collect();

    #[cfg(not(feature = "parallel"))]
    let entries: Vec<IndexEntry> = records.into_iter().map(build_entry).collect();

    SearchIndex { entries }
}

impl SearchIndex {
    /// Same as [`build_index`].
    pub fn build(records: Vec<DocumentRecord>) -> Self {
        build_index(records)
    }
}
