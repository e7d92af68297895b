// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the search layer.
//!
//! Hugo renders one [`DocumentRecord`] per page into `index.json`. Loading turns
//! each record into an [`IndexEntry`] (same metadata plus pre-tokenized text),
//! and every query produces a fresh batch of [`SearchResult`]s.
//!
//! # Invariants
//!
//! - **IndexEntry**: built once per load, never mutated. `search_text`,
//!   `title_words` and `content_words` are always derived from the record they
//!   sit next to.
//! - **SearchResult**: `score` only orders results within one query. Comparing
//!   scores across queries (or across reloads) is meaningless.

use serde::{Deserialize, Serialize};

/// Result id of the informational notice returned when the index is empty.
///
/// Hosts must render this as plain text, never as a clickable result.
pub const NO_INDEX_ID: &str = "no-index";

/// Record id Hugo emits as a lone placeholder when no pages were rendered.
pub const DEBUG_SENTINEL_ID: &str = "debug-placeholder";

/// Navigation target of non-navigable results.
pub const INERT_URL: &str = "#";

// =============================================================================
// NEWTYPES
// =============================================================================

/// Milliseconds on the host's monotonic clock (`performance.now()` in a browser).
///
/// Only differences between two values carry meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// `self + delay`, saturating at the clock's end.
    #[inline]
    pub fn after(self, delay: u64) -> Self {
        Millis(self.0.saturating_add(delay))
    }
}

impl From<u64> for Millis {
    fn from(ms: u64) -> Self {
        Millis(ms)
    }
}

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One page as Hugo writes it into `index.json`.
///
/// Only `id`, `title` and `url` are required. Everything else defaults to empty
/// so half-configured front matter still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A record plus the tokenized forms the matcher scans.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub record: DocumentRecord,
    /// Normalized title, for the verbatim-substring bonus.
    pub title_text: String,
    /// Normalized `title content tags categories`, for whole-string matching.
    pub search_text: String,
    /// Normalized title tokens longer than two characters.
    pub title_words: Vec<String>,
    /// Normalized content tokens longer than two characters.
    pub content_words: Vec<String>,
}

/// The complete in-memory index for one page load.
///
/// Read-only after construction, so it can be shared by reference between the
/// engine and any number of controllers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
    pub entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// One ranked hit, shaped for the results dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub url: String,
    pub section: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub score: f64,
    /// HTML: escaped title with query occurrences wrapped in `<mark>`.
    pub highlight: String,
}

impl SearchResult {
    /// The notice shown in place of results when there is nothing to search.
    pub fn no_index() -> Self {
        SearchResult {
            id: NO_INDEX_ID.to_string(),
            title: "Search index not available".to_string(),
            content: "The search index is empty or failed to load. Check that the site \
                      config enables the JSON output format for the home page and that \
                      at least one page is published."
                .to_string(),
            summary: None,
            url: INERT_URL.to_string(),
            section: None,
            kind: None,
            score: 0.0,
            highlight: "Search index not available".to_string(),
        }
    }

    /// Is this the empty-index notice rather than a real match?
    pub fn is_notice(&self) -> bool {
        self.id == NO_INDEX_ID
    }
}
