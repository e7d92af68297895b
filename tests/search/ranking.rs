//! Ranking tests: which page comes first, and why.

use super::common::{fixture_engine, make_record, titles};
use sitesift::{build_index, SearchConfig, SearchEngine};

// ============================================================================
// FIXTURE QUERIES
// ============================================================================

#[test]
fn test_exact_title_match_ranks_first() {
    let results = fixture_engine().search("async rust");
    assert_eq!(results[0].title, "Async Rust Patterns");
    assert_eq!(results[0].highlight, "<mark>Async Rust</mark> Patterns");
}

#[test]
fn test_single_word_title_queries() {
    let engine = fixture_engine();
    assert_eq!(engine.search("sourdough")[0].title, "Sourdough Starter Diary");
    assert_eq!(engine.search("autovacuum")[0].title, "Tuning PostgreSQL Autovacuum");
    assert_eq!(engine.search("webassembly")[0].title, "WebAssembly Without a Bundler");
}

#[test]
fn test_unaccented_query_finds_accented_title() {
    let results = fixture_engine().search("cafe");
    assert_eq!(results[0].title, "Café Hopping in Lisbon");
}

#[test]
fn test_all_rust_posts_found() {
    let results = fixture_engine().search("rust");
    let found = titles(&results);
    for title in ["Async Rust Patterns", "Rust Basics", "Error Handling in Rust"] {
        assert!(found.contains(&title), "missing {title} in {found:?}");
    }
}

#[test]
fn test_results_sorted_by_score() {
    let results = fixture_engine().search("rust");
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "{:?}", titles(&results));
    }
}

#[test]
fn test_highlight_marks_query_in_title() {
    let results = fixture_engine().search("rust");
    let errors = results
        .iter()
        .find(|r| r.title == "Error Handling in Rust")
        .expect("error handling post");
    assert_eq!(errors.highlight, "Error Handling in <mark>Rust</mark>");
}

// ============================================================================
// SIGNAL ORDERING
// ============================================================================

#[test]
fn test_title_match_outranks_content_match() {
    let index = build_index(vec![
        make_record("notes", "Weekly notes", "we finally moved everything to kubernetes"),
        make_record("k8s", "Kubernetes Operators", "reconcile loops"),
    ]);
    let engine = SearchEngine::new(index, SearchConfig::default());
    let results = engine.search("kubernetes");
    assert_eq!(results[0].id, "k8s");
    assert_eq!(results.len(), 2);
}

#[test]
fn test_word_start_outranks_mid_word() {
    let index = build_index(vec![
        make_record("mid", "Trustworthy builds", "reproducible"),
        make_record("start", "Rust builds", "reproducible"),
    ]);
    let engine = SearchEngine::new(index, SearchConfig::default());
    assert_eq!(engine.search("rust")[0].id, "start");
}

#[test]
fn test_contiguous_beats_scattered() {
    let index = build_index(vec![
        make_record("scattered", "Rabbits under snow today", "x"),
        make_record("contiguous", "Rust today", "x"),
    ]);
    let engine = SearchEngine::new(index, SearchConfig::default());
    assert_eq!(engine.search("rust")[0].id, "contiguous");
}

#[test]
fn test_ties_keep_catalog_order() {
    let index = build_index(vec![
        make_record("one", "Tokio", "runtime"),
        make_record("two", "Tokio", "runtime"),
    ]);
    let engine = SearchEngine::new(index, SearchConfig::default());
    let ids: Vec<String> = engine.search("tokio").into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["one", "two"]);
}
