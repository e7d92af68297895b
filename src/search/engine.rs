// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match engine: one synchronous scan over the in-memory index.
//!
//! Per query:
//!
//! ```text
//! trim ─▶ too short? ─▶ []
//!   │
//!   ▼
//! index empty? ─▶ [no-index notice]
//!   │
//!   ▼
//! prepare (normalize, split words, compile escaped patterns) once
//!   │
//!   ▼
//! score every entry ─▶ drop current page, drop ≤ threshold
//!   │
//!   ▼
//! rank (score desc, catalog order) ─▶ truncate ─▶ highlight
//! ```
//!
//! Nothing in here can panic on user input: the query only reaches regex
//! construction escaped, and a pattern that fails to compile just switches off
//! its signal.

use regex::Regex;

use crate::config::SearchConfig;
use crate::scoring::ranking::{rank, Candidate};
use crate::scoring::{combine, fuzzy_score, word_pair_score, Signals};
use crate::search::highlight::{highlight, literal_pattern, word_boundary_pattern};
use crate::types::{IndexEntry, SearchIndex, SearchResult};
use crate::utils::{normalize, words};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Queries shorter than this (in chars, after trimming) return nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// Anything that turns a query into ranked results.
///
/// The interaction controller only needs this, which keeps it testable with a
/// stub that counts calls.
pub trait Searcher {
    fn search(&self, query: &str) -> Vec<SearchResult>;
}

impl<T: Searcher + ?Sized> Searcher for &T {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        (**self).search(query)
    }
}

impl<T: Searcher + ?Sized> Searcher for std::rc::Rc<T> {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        (**self).search(query)
    }
}

/// Query state computed once and shared by every candidate.
struct PreparedQuery {
    normalized: String,
    words: Vec<String>,
    literal: Option<Regex>,
    boundary: Option<Regex>,
}

impl PreparedQuery {
    fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let words = words(&normalized);
        Self {
            normalized,
            words,
            literal: literal_pattern(raw),
            boundary: word_boundary_pattern(raw),
        }
    }
}

/// Fuzzy search over one loaded index.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: SearchIndex,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(index: SearchIndex, config: SearchConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Ranked results for `query`, at most `max_results` of them.
    ///
    /// Returns `[]` for queries under two characters and a single
    /// [`SearchResult::no_index`] notice when the index is empty.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }
        if self.index.is_empty() {
            return vec![SearchResult::no_index()];
        }

        let prepared = PreparedQuery::new(trimmed);
        let ranked = rank(self.candidates(&prepared), self.config.max_results);

        tracing::debug!(query = trimmed, results = ranked.len(), "search");

        ranked
            .into_iter()
            .map(|c| self.to_result(c, &prepared))
            .collect()
    }

    /// Total score of one entry, or `None` when it is excluded or below threshold.
    fn evaluate(
        &self,
        position: usize,
        entry: &IndexEntry,
        query: &PreparedQuery,
    ) -> Option<Candidate> {
        if self.is_current_page(entry) {
            return None;
        }
        let score = combine(&signals(entry, query), &self.config.weights);
        (score > self.config.threshold).then_some(Candidate { position, score })
    }

    #[cfg(feature = "parallel")]
    fn candidates(&self, query: &PreparedQuery) -> Vec<Candidate> {
        self.index
            .entries
            .par_iter()
            .enumerate()
            .filter_map(|(position, entry)| self.evaluate(position, entry, query))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn candidates(&self, query: &PreparedQuery) -> Vec<Candidate> {
        self.index
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| self.evaluate(position, entry, query))
            .collect()
    }

    fn is_current_page(&self, entry: &IndexEntry) -> bool {
        self.config
            .current_path
            .as_deref()
            .is_some_and(|path| path == entry.record.url)
    }

    fn to_result(&self, candidate: Candidate, query: &PreparedQuery) -> SearchResult {
        let record = &self.index.entries[candidate.position].record;
        SearchResult {
            id: record.id.clone(),
            title: record.title.clone(),
            content: record.content.clone(),
            summary: record.summary.clone(),
            url: record.url.clone(),
            section: record.section.clone(),
            kind: record.kind.clone(),
            score: candidate.score,
            highlight: highlight(&record.title, query.literal.as_ref()),
        }
    }
}

impl Searcher for SearchEngine {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        SearchEngine::search(self, query)
    }
}

/// Measure every signal for one entry.
fn signals(entry: &IndexEntry, query: &PreparedQuery) -> Signals {
    let record = &entry.record;
    Signals {
        whole_text: fuzzy_score(&query.normalized, &entry.search_text),
        title_words: word_pair_score(&query.words, &entry.title_words),
        content_words: word_pair_score(&query.words, &entry.content_words),
        exact_title: !query.normalized.is_empty() && entry.title_text.contains(&query.normalized),
        word_boundary: query
            .boundary
            .as_ref()
            .is_some_and(|re| re.is_match(&record.title) || re.is_match(&record.content)),
    }
}
