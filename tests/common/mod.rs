//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;

use sitesift::{
    build_index, parse_catalog, InputKind, Navigator, Renderer, ResultsView, SearchConfig,
    SearchEngine, SearchIndex, SearchResult, Searcher,
};

// Re-export canonical test utilities from sitesift::testing
pub use sitesift::testing::{catalog_json, make_index, make_record, make_record_at};

/// A small blog catalog in the shape Hugo's index template writes.
pub const FIXTURE_INDEX: &str = "fixtures/index.json";

pub fn fixture_body() -> String {
    fs::read_to_string(FIXTURE_INDEX).expect("Failed to read fixture")
}

pub fn fixture_index() -> SearchIndex {
    build_index(parse_catalog(&fixture_body()).expect("Invalid fixture"))
}

pub fn fixture_engine() -> SearchEngine {
    SearchEngine::new(fixture_index(), SearchConfig::default())
}

/// Titles of `results`, in order.
pub fn titles(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.title.as_str()).collect()
}

// ============================================================================
// CONTROLLER DOUBLES
// ============================================================================

/// Wraps a real searcher and records every query it receives.
pub struct CountingSearcher<S> {
    pub inner: S,
    pub queries: RefCell<Vec<String>>,
}

impl<S> CountingSearcher<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl<S: Searcher> Searcher for CountingSearcher<S> {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        self.queries.borrow_mut().push(query.to_string());
        self.inner.search(query)
    }
}

/// Records what the controller drew.
#[derive(Default)]
pub struct RecordingRenderer {
    pub shown: Vec<(InputKind, ResultsView)>,
    pub hidden: Vec<InputKind>,
}

impl RecordingRenderer {
    pub fn last_view(&self) -> Option<&ResultsView> {
        self.shown.last().map(|(_, v)| v)
    }
}

impl Renderer for RecordingRenderer {
    fn show(&mut self, input: InputKind, view: &ResultsView) {
        self.shown.push((input, view.clone()));
    }

    fn hide(&mut self, input: InputKind) {
        self.hidden.push(input);
    }
}

/// Records navigations instead of leaving the page.
#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}
