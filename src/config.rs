// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knobs for the matcher and the dropdown.
//!
//! Every field has a default, so `{}` is a valid config and callers only name
//! what they change. Field names are camelCase because the usual source is a
//! JS options object or a JSON file next to the site config.
//!
//! The scoring weights are empirically tuned defaults; only the relative
//! ranking they produce is relied on.

use serde::Deserialize;

/// Weight of the whole-text fuzzy match against `search_text`.
pub const DEFAULT_WHOLE_TEXT_WEIGHT: f64 = 2.0;
/// Weight of the summed query-word × title-word fuzzy matches.
pub const DEFAULT_TITLE_WORD_WEIGHT: f64 = 3.0;
/// Weight of the summed query-word × content-word fuzzy matches.
pub const DEFAULT_CONTENT_WORD_WEIGHT: f64 = 1.0;
/// Flat bonus when the title contains the query verbatim.
pub const DEFAULT_EXACT_TITLE_BONUS: f64 = 5.0;
/// Flat bonus when the query starts at a word boundary in title or content.
pub const DEFAULT_WORD_BOUNDARY_BONUS: f64 = 2.0;

pub const DEFAULT_THRESHOLD: f64 = 0.3;
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_PREVIEW_LENGTH: usize = 100;
pub const DEFAULT_SEARCH_PAGE_PATH: &str = "/search/";

/// How the scoring signals combine into one total.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    pub whole_text: f64,
    pub title_word: f64,
    pub content_word: f64,
    pub exact_title: f64,
    pub word_boundary: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            whole_text: DEFAULT_WHOLE_TEXT_WEIGHT,
            title_word: DEFAULT_TITLE_WORD_WEIGHT,
            content_word: DEFAULT_CONTENT_WORD_WEIGHT,
            exact_title: DEFAULT_EXACT_TITLE_BONUS,
            word_boundary: DEFAULT_WORD_BOUNDARY_BONUS,
        }
    }
}

/// Search configuration, injected once per page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Candidates scoring at or below this are dropped (default: 0.3)
    pub threshold: f64,
    /// Maximum number of results per query (default: 10)
    pub max_results: usize,
    /// Quiet period after the last keystroke before searching (default: 200)
    pub debounce_ms: u64,
    /// Preview cut-off in characters (default: 100)
    pub preview_length: usize,
    /// Full results page that form submission navigates to (default: "/search/")
    pub search_page_path: String,
    /// Path of the page doing the searching; it never appears in its own results
    pub current_path: Option<String>,
    pub weights: ScoringWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            preview_length: DEFAULT_PREVIEW_LENGTH,
            search_page_path: DEFAULT_SEARCH_PAGE_PATH.to_string(),
            current_path: None,
            weights: ScoringWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Parse a JSON config; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Same config, searching from `path`.
    pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = Some(path.into());
        self
    }
}
