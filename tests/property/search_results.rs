//! Search result invariants over arbitrary queries and catalogs.
//!
//! For every query the engine must:
//! - return at most `max_results` results
//! - return only results scoring above the threshold
//! - return results in non-increasing score order
//! - never return the page the search runs on
//! - return the same results for the same input

use proptest::prelude::*;
use sitesift::{build_index, DocumentRecord, SearchConfig, SearchEngine};

use super::common::{fixture_index, make_record_at};

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z]{0,12}").unwrap(),
        prop::string::string_regex("[a-z ]{0,20}").unwrap(),
        prop::string::string_regex("[a-zA-Z0-9()\\[\\]*+?.^$|\\\\ ]{0,16}").unwrap(),
        any::<String>(),
    ]
}

fn record_strategy() -> impl Strategy<Value = (String, String)> {
    (
        prop::string::string_regex("[A-Za-z][a-z]{2,8}( [a-z]{2,8}){0,3}").unwrap(),
        prop::string::string_regex("([a-z]{2,10} ){0,15}").unwrap(),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<DocumentRecord>> {
    prop::collection::vec(record_strategy(), 1..30).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, (title, content))| {
                make_record_at(&format!("d{i}"), &title, &content, &format!("/p/{i}/"))
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Results never exceed the configured limit.
    #[test]
    fn prop_bounded_output(query in query_strategy(), limit in 1usize..15) {
        let config = SearchConfig { max_results: limit, ..SearchConfig::default() };
        let engine = SearchEngine::new(fixture_index(), config);
        prop_assert!(engine.search(&query).len() <= limit);
    }

    /// Every returned score clears the threshold, and order is non-increasing.
    #[test]
    fn prop_scores_above_threshold_and_sorted(
        catalog in catalog_strategy(),
        query in query_strategy(),
        threshold in 0.0f64..8.0,
    ) {
        let config = SearchConfig { threshold, ..SearchConfig::default() };
        let engine = SearchEngine::new(build_index(catalog), config);
        let results = engine.search(&query);
        for r in &results {
            prop_assert!(r.score > threshold, "score {} <= threshold {}", r.score, threshold);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// The current page never appears.
    #[test]
    fn prop_current_page_excluded(
        catalog in catalog_strategy(),
        query in query_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let current = catalog[pick.index(catalog.len())].url.clone();
        let config = SearchConfig::default().with_current_path(current.clone());
        let engine = SearchEngine::new(build_index(catalog), config);
        prop_assert!(engine.search(&query).iter().all(|r| r.url != current));
    }

    /// Searching is a pure function of index, config and query.
    #[test]
    fn prop_idempotent(catalog in catalog_strategy(), query in query_strategy()) {
        let engine = SearchEngine::new(build_index(catalog), SearchConfig::default());
        prop_assert_eq!(engine.search(&query), engine.search(&query));
    }

    /// Queries under two characters produce nothing.
    #[test]
    fn prop_short_queries_empty(query in "\\s*[a-z]?\\s*") {
        prop_assert!(SearchEngine::new(fixture_index(), SearchConfig::default())
            .search(&query)
            .is_empty());
    }

    /// Titles searched verbatim are always found.
    #[test]
    fn prop_title_finds_itself(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let target = catalog[pick.index(catalog.len())].clone();
        let config = SearchConfig { max_results: catalog.len(), ..SearchConfig::default() };
        let engine = SearchEngine::new(build_index(catalog), config);
        let results = engine.search(&target.title);
        prop_assert!(results.iter().any(|r| r.title == target.title));
    }
}
