//! Edge case tests: hostile, degenerate and boundary inputs.

use super::common::{fixture_engine, make_index, make_record};
use sitesift::{build_index, SearchConfig, SearchEngine, SearchIndex, INERT_URL, NO_INDEX_ID};

#[test]
fn test_short_queries_return_nothing() {
    let engine = fixture_engine();
    for query in ["", " ", "r", "  r  ", "\t"] {
        assert!(engine.search(query).is_empty(), "query {query:?}");
    }
}

#[test]
fn test_two_chars_is_enough() {
    assert!(!fixture_engine().search("ru").is_empty());
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let engine = fixture_engine();
    assert_eq!(engine.search("  rust  "), engine.search("rust"));
}

#[test]
fn test_same_query_same_results() {
    let engine = fixture_engine();
    assert_eq!(engine.search("async"), engine.search("async"));
}

#[test]
fn test_regex_special_characters() {
    let engine = fixture_engine();
    for query in ["c++", "(rust", "rust)", "[", "]]", "\\d+", "a{2,}", "$^", "?*", "|"] {
        // Only checks that nothing panics; many of these match nothing.
        let _ = engine.search(query);
    }
}

#[test]
fn test_regex_literal_title_matches_itself() {
    let engine = SearchEngine::new(
        make_index(&[("C++ Templates (Part 1)", "sfinae"), ("Gardening", "soil")]),
        SearchConfig::default(),
    );
    let results = engine.search("(Part 1)");
    assert_eq!(results[0].title, "C++ Templates (Part 1)");
    assert_eq!(results[0].highlight, "C++ Templates <mark>(Part 1)</mark>");
}

#[test]
fn test_html_in_title_is_escaped() {
    let index = build_index(vec![make_record("x", "<b>Bold</b> move", "markup")]);
    let engine = SearchEngine::new(index, SearchConfig::default());
    assert_eq!(
        engine.search("bold")[0].highlight,
        "&lt;b&gt;<mark>Bold</mark>&lt;/b&gt; move"
    );
}

#[test]
fn test_empty_index_notice() {
    let engine = SearchEngine::new(SearchIndex::default(), SearchConfig::default());
    let results = engine.search("rust");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, NO_INDEX_ID);
    assert_eq!(results[0].url, INERT_URL);
    assert!(results[0].is_notice());
}

#[test]
fn test_record_with_empty_content() {
    let engine = SearchEngine::new(make_index(&[("Just A Title", "")]), SearchConfig::default());
    assert_eq!(engine.search("title")[0].content, "");
}

#[test]
fn test_very_long_query() {
    let query = "rust ".repeat(2_000);
    let _ = fixture_engine().search(&query);
}

#[test]
fn test_unicode_query_on_ascii_catalog() {
    let results = fixture_engine().search("日本語");
    assert!(results.is_empty());
}

#[test]
fn test_blank_summary_previews_content() {
    let results = fixture_engine().search("rust basics");
    let basics = results
        .iter()
        .find(|r| r.title == "Rust Basics")
        .expect("Rust Basics should match");
    assert_eq!(basics.summary.as_deref(), Some(""));

    let text = sitesift::controller::preview(basics, 40);
    assert!(text.starts_with("Ownership, borrowing"), "preview was {text:?}");
    assert!(text.ends_with("..."));
}
