// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side fuzzy search for Hugo sites.
//!
//! Hugo writes an `index.json` catalog of every page. This crate loads it once
//! per page view, scores pages against what the user types with a weighted
//! fuzzy-subsequence matcher, and drives the search dropdown.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  loader/    │────▶│  index.rs    │────▶│  search/     │────▶│ controller/  │
//! │ (fetch,     │     │ (tokenize,   │     │ (score, rank,│     │ (debounce,   │
//! │  validate)  │     │  normalize)  │     │  highlight)  │     │  keys, view) │
//! └─────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                                                 ▼
//!                                          ┌──────────────┐
//!                                          │  scoring/    │
//!                                          │ (fuzzy_score,│
//!                                          │  weights)    │
//!                                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sitesift::{build_index, DocumentRecord, SearchConfig, SearchEngine};
//!
//! let records: Vec<DocumentRecord> = serde_json::from_str(r#"[
//!     {"id": "1", "title": "Async Rust Patterns", "url": "/posts/async/"},
//!     {"id": "2", "title": "Gardening", "url": "/posts/garden/"}
//! ]"#).unwrap();
//!
//! let engine = SearchEngine::new(build_index(records), SearchConfig::default());
//! let results = engine.search("async");
//! assert_eq!(results[0].url, "/posts/async/");
//! ```

pub mod config;
pub mod controller;
pub mod error;
mod index;
pub mod loader;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{ScoringWeights, SearchConfig};
pub use controller::{
    BoxState, InputKind, InteractionController, Key, KeyOutcome, Navigator, Renderer,
    ResultItem, ResultsView,
};
pub use error::LoadError;
pub use index::{build_entry, build_index};
pub use loader::{parse_catalog, resolve_base_path, CatalogSource, FileSource, IndexLoader};
pub use scoring::fuzzy_score;
pub use search::{SearchEngine, Searcher};
pub use types::{
    DocumentRecord, IndexEntry, Millis, SearchIndex, SearchResult, DEBUG_SENTINEL_ID, INERT_URL,
    NO_INDEX_ID,
};
pub use utils::{normalize, truncate_chars, words};
