// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading: one fetch per page, never an error.
//!
//! ```text
//! base path ─▶ <base>/index.json ─▶ CatalogSource::fetch ─▶ parse_catalog
//!                                          │                     │
//!                                          └── LoadError ──┬─────┘
//!                                                          ▼
//!                                             warn! + hint, empty catalog
//!                                                          │
//!                                                          ▼
//!                                                     build_index
//! ```
//!
//! The loader always resolves to a [`SearchIndex`]. Failures are logged with a
//! pointer at the usual Hugo misconfiguration and degrade to an empty index,
//! which the engine answers with the `no-index` notice.

mod base_path;
mod source;

pub use base_path::{index_url, is_local_host, resolve_base_path, BASE_URL_META, INDEX_FILE};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{CatalogSource, FileSource};

use crate::error::LoadError;
use crate::index::build_index;
use crate::types::{DocumentRecord, SearchIndex, DEBUG_SENTINEL_ID};

/// Parse and validate a catalog body.
///
/// Rejects malformed JSON, records missing required fields, an empty array,
/// and the lone debug placeholder Hugo emits when it rendered no pages.
pub fn parse_catalog(body: &str) -> Result<Vec<DocumentRecord>, LoadError> {
    let records: Vec<DocumentRecord> = serde_json::from_str(body)?;
    match records.as_slice() {
        [] => Err(LoadError::EmptyCatalog),
        [only] if only.id == DEBUG_SENTINEL_ID => Err(LoadError::DebugSentinel),
        _ => Ok(records),
    }
}

/// Parse a catalog body straight into an index, degrading like [`IndexLoader::load`].
pub fn index_from_json(body: &str) -> SearchIndex {
    build_index(recover(parse_catalog(body), "<inline>"))
}

/// Log a load failure and fall back to an empty catalog.
fn recover(result: Result<Vec<DocumentRecord>, LoadError>, url: &str) -> Vec<DocumentRecord> {
    match result {
        Ok(records) => {
            tracing::info!(url, documents = records.len(), "search index loaded");
            records
        }
        Err(err) => {
            tracing::warn!(
                url,
                error = %err,
                hint = err.hint(),
                "search index unavailable; search will show a notice"
            );
            Vec::new()
        }
    }
}

/// Loads the catalog for one page from a [`CatalogSource`].
pub struct IndexLoader<S: CatalogSource> {
    source: S,
    url: String,
}

impl<S: CatalogSource> IndexLoader<S> {
    /// Load `<base_path>/index.json`.
    pub fn new(source: S, base_path: &str) -> Self {
        Self::at(source, index_url(base_path))
    }

    /// Load an explicit URL.
    pub fn at(source: S, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and validate, surfacing the failure.
    pub async fn fetch_catalog(&self) -> Result<Vec<DocumentRecord>, LoadError> {
        let body = self.source.fetch(&self.url).await?;
        parse_catalog(&body)
    }

    /// Fetch once and build the index. Never fails; see the module docs.
    pub async fn load(&self) -> SearchIndex {
        build_index(recover(self.fetch_catalog().await, &self.url))
    }
}
