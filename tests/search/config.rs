//! Configuration tests: limits, thresholds and the current page.

use super::common::{fixture_index, make_index};
use sitesift::{ScoringWeights, SearchConfig, SearchEngine};

#[test]
fn test_max_results_respected() {
    let config = SearchConfig {
        max_results: 2,
        ..SearchConfig::default()
    };
    let engine = SearchEngine::new(fixture_index(), config);
    assert_eq!(engine.search("rust").len(), 2);
}

#[test]
fn test_high_threshold_filters_everything() {
    let config = SearchConfig {
        threshold: 1_000.0,
        ..SearchConfig::default()
    };
    let engine = SearchEngine::new(fixture_index(), config);
    assert!(engine.search("rust").is_empty());
}

#[test]
fn test_scores_above_threshold() {
    let config = SearchConfig {
        threshold: 3.0,
        ..SearchConfig::default()
    };
    let engine = SearchEngine::new(fixture_index(), config);
    let results = engine.search("database");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.score > 3.0));
}

#[test]
fn test_current_page_never_returned() {
    let config = SearchConfig::default().with_current_path("/posts/rust-basics/");
    let engine = SearchEngine::new(fixture_index(), config);
    let results = engine.search("rust basics");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.url != "/posts/rust-basics/"));
}

#[test]
fn test_config_from_json_options() {
    let config = SearchConfig::from_json(
        r#"{"maxResults": 3, "threshold": 0.5, "currentPath": "/about/"}"#,
    )
    .unwrap();
    assert_eq!(config.max_results, 3);
    assert_eq!(config.current_path.as_deref(), Some("/about/"));
    assert_eq!(config.debounce_ms, SearchConfig::default().debounce_ms);
}

#[test]
fn test_custom_weights_change_ranking() {
    let docs = &[("Kubernetes Operators", "x"), ("Notes", "kubernetes everywhere")];

    let default_engine = SearchEngine::new(make_index(docs), SearchConfig::default());
    assert_eq!(default_engine.search("kubernetes")[0].id, "doc0");

    // Content-only weighting flips the order
    let content_only = SearchConfig {
        weights: ScoringWeights {
            whole_text: 0.0,
            title_word: 0.0,
            content_word: 1.0,
            exact_title: 0.0,
            word_boundary: 0.0,
        },
        ..SearchConfig::default()
    };
    let engine = SearchEngine::new(make_index(docs), content_only);
    let results = engine.search("kubernetes");
    assert_eq!(results[0].id, "doc1");
    assert_eq!(results.len(), 1);
}
