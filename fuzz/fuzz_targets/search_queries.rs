// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary catalogs and arbitrary queries go straight into the engine. The
//! query reaches regex construction, HTML escaping and char-indexed scoring,
//! so emoji, lone combining marks and regex syntax all get exercised.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesift::{build_index, DocumentRecord, SearchConfig, SearchEngine};

#[derive(Debug, Arbitrary)]
struct Page {
    title: String,
    content: String,
    tags: Vec<String>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    pages: Vec<Page>,
    query: String,
    max_results: u8,
    current: u8,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    let query: String = input.query.chars().take(200).collect();
    let records: Vec<DocumentRecord> = input
        .pages
        .into_iter()
        .take(50)
        .enumerate()
        .map(|(i, p)| DocumentRecord {
            id: i.to_string(),
            title: p.title.chars().take(200).collect(),
            content: p.content.chars().take(2_000).collect(),
            summary: None,
            url: format!("/p/{}/", i),
            tags: p.tags.into_iter().take(5).collect(),
            categories: vec![],
            date: None,
            section: None,
            kind: None,
        })
        .collect();

    let limit = usize::from(input.max_results.max(1));
    let current = format!("/p/{}/", input.current);
    let config = SearchConfig {
        max_results: limit,
        ..SearchConfig::default()
    }
    .with_current_path(current.clone());
    let threshold = config.threshold;
    let engine = SearchEngine::new(build_index(records), config);

    // INVARIANT 1: search() never panics
    let results = engine.search(&query);

    // INVARIANT 2: bounded by the limit
    assert!(results.len() <= limit);

    for r in results.iter().filter(|r| !r.is_notice()) {
        // INVARIANT 3: every hit clears the threshold and is not the current page
        assert!(r.score > threshold, "score {} <= {}", r.score, threshold);
        assert_ne!(r.url, current);

        // INVARIANT 4: highlight is escaped HTML with balanced marks
        assert_eq!(r.highlight.matches("<mark>").count(), r.highlight.matches("</mark>").count());
        let stripped = r.highlight.replace("<mark>", "").replace("</mark>", "");
        assert!(!stripped.contains('<') && !stripped.contains('>'));
    }

    // INVARIANT 5: non-increasing scores
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
});
