//! The search dropdown driven end to end: real engine, recorded DOM.

use super::common::{
    fixture_engine, make_index, CountingSearcher, RecordingNavigator, RecordingRenderer,
};
use sitesift::{
    BoxState, InputKind, InteractionController, Key, KeyOutcome, Millis, ResultsView,
    SearchConfig, SearchEngine, SearchIndex,
};

type Controller = InteractionController<
    CountingSearcher<SearchEngine>,
    RecordingRenderer,
    RecordingNavigator,
>;

const DESKTOP: InputKind = InputKind::Desktop;
const MOBILE: InputKind = InputKind::Mobile;

fn controller_over(engine: SearchEngine) -> Controller {
    let mut c = InteractionController::new(
        CountingSearcher::new(engine),
        RecordingRenderer::default(),
        RecordingNavigator::default(),
        SearchConfig::default(),
    );
    c.bind(DESKTOP);
    c
}

/// Three equally matching pages, in catalog order.
fn three_results() -> Controller {
    let engine = SearchEngine::new(
        make_index(&[("Tokio", "runtime"), ("Tokio", "runtime"), ("Tokio", "runtime")]),
        SearchConfig::default(),
    );
    let mut c = controller_over(engine);
    type_and_wait(&mut c, DESKTOP, "tokio");
    c
}

fn type_and_wait(c: &mut Controller, kind: InputKind, text: &str) {
    c.on_input(kind, text, Millis(0));
    c.tick(Millis(200));
}

// ============================================================================
// DEBOUNCE
// ============================================================================

#[test]
fn test_typing_burst_runs_one_search() {
    let mut c = controller_over(fixture_engine());
    for (i, text) in ["as", "asy", "asyn", "async"].iter().enumerate() {
        c.on_input(DESKTOP, text, Millis(i as u64 * 60));
    }
    assert_eq!(c.state(DESKTOP), Some(BoxState::Debouncing));
    assert_eq!(c.next_deadline(), Some(Millis(380)));

    c.tick(Millis(379));
    assert!(c.searcher().queries.borrow().is_empty());

    c.tick(Millis(380));
    assert_eq!(*c.searcher().queries.borrow(), vec!["async".to_string()]);
    assert_eq!(c.state(DESKTOP), Some(BoxState::Shown));
}

#[test]
fn test_clearing_input_hides_dropdown() {
    let mut c = controller_over(fixture_engine());
    type_and_wait(&mut c, DESKTOP, "rust");
    c.on_input(DESKTOP, "", Millis(500));
    assert_eq!(c.state(DESKTOP), Some(BoxState::Idle));
    assert_eq!(c.renderer().hidden, vec![DESKTOP]);
    assert!(c.view(DESKTOP).is_none());
}

#[test]
fn test_inputs_debounce_independently() {
    let mut c = controller_over(fixture_engine());
    c.bind(MOBILE);
    c.on_input(DESKTOP, "rust", Millis(0));
    c.on_input(MOBILE, "sourdough", Millis(100));

    c.tick(Millis(200));
    assert_eq!(c.state(DESKTOP), Some(BoxState::Shown));
    assert_eq!(c.state(MOBILE), Some(BoxState::Debouncing));

    c.tick(Millis(300));
    assert_eq!(c.state(MOBILE), Some(BoxState::Shown));
    assert_eq!(c.searcher().queries.borrow().len(), 2);
}

// ============================================================================
// KEYBOARD
// ============================================================================

#[test]
fn test_arrow_up_from_nothing_selects_last() {
    let mut c = three_results();
    assert_eq!(c.on_key(DESKTOP, Key::ArrowUp), KeyOutcome::Handled);
    assert_eq!(c.view(DESKTOP).and_then(ResultsView::active), Some(2));
}

#[test]
fn test_arrow_down_wraps_to_first() {
    let mut c = three_results();
    c.on_key(DESKTOP, Key::ArrowUp);
    c.on_key(DESKTOP, Key::ArrowDown);
    assert_eq!(c.view(DESKTOP).and_then(ResultsView::active), Some(0));
}

#[test]
fn test_arrow_down_walks_the_list() {
    let mut c = three_results();
    let mut seen = Vec::new();
    for _ in 0..4 {
        c.on_key(DESKTOP, Key::ArrowDown);
        seen.push(c.view(DESKTOP).and_then(ResultsView::active));
    }
    assert_eq!(seen, vec![Some(0), Some(1), Some(2), Some(0)]);
}

#[test]
fn test_enter_opens_active_result() {
    let mut c = three_results();
    c.on_key(DESKTOP, Key::ArrowDown);
    c.on_key(DESKTOP, Key::ArrowDown);
    assert_eq!(c.on_key(DESKTOP, Key::Enter), KeyOutcome::Handled);
    assert_eq!(c.navigator().visited, vec!["/posts/doc1/"]);
    assert_eq!(c.state(DESKTOP), Some(BoxState::Idle));
}

#[test]
fn test_enter_without_selection_is_not_handled() {
    let mut c = three_results();
    assert_eq!(c.on_key(DESKTOP, Key::Enter), KeyOutcome::Ignored);
    assert!(c.navigator().visited.is_empty());
}

#[test]
fn test_escape_hides() {
    let mut c = three_results();
    assert_eq!(c.on_key(DESKTOP, Key::Escape), KeyOutcome::Handled);
    assert_eq!(c.state(DESKTOP), Some(BoxState::Idle));
    assert_eq!(c.on_key(DESKTOP, Key::Escape), KeyOutcome::Ignored);
}

#[test]
fn test_other_keys_ignored() {
    let mut c = three_results();
    assert_eq!(c.on_key(DESKTOP, Key::from_dom("a")), KeyOutcome::Ignored);
    assert_eq!(c.on_key(DESKTOP, Key::from_dom("Tab")), KeyOutcome::Ignored);
}

// ============================================================================
// POINTER
// ============================================================================

#[test]
fn test_hover_moves_selection() {
    let mut c = three_results();
    c.on_hover(DESKTOP, 1);
    assert_eq!(c.view(DESKTOP).and_then(ResultsView::active), Some(1));

    // Keyboard continues from the hovered row
    c.on_key(DESKTOP, Key::ArrowDown);
    assert_eq!(c.view(DESKTOP).and_then(ResultsView::active), Some(2));
}

#[test]
fn test_hover_out_of_range_ignored() {
    let mut c = three_results();
    c.on_hover(DESKTOP, 7);
    assert_eq!(c.view(DESKTOP).and_then(ResultsView::active), None);
}

#[test]
fn test_click_navigates() {
    let mut c = three_results();
    assert!(c.on_click(DESKTOP, 2));
    assert_eq!(c.navigator().visited, vec!["/posts/doc2/"]);
    assert!(c.renderer().hidden.contains(&DESKTOP));
}

#[test]
fn test_outside_click_hides() {
    let mut c = three_results();
    c.on_outside_click(DESKTOP);
    assert_eq!(c.state(DESKTOP), Some(BoxState::Idle));
    assert_eq!(c.renderer().hidden, vec![DESKTOP]);
}

// ============================================================================
// NON-RESULT VIEWS
// ============================================================================

#[test]
fn test_no_matches_message() {
    let mut c = controller_over(fixture_engine());
    type_and_wait(&mut c, DESKTOP, "zzzz");
    match c.view(DESKTOP) {
        Some(ResultsView::NoMatches { message, .. }) => {
            assert_eq!(message, "No results found for 'zzzz'");
        }
        other => panic!("expected NoMatches, got {other:?}"),
    }
    assert_eq!(c.on_key(DESKTOP, Key::ArrowDown), KeyOutcome::Ignored);
}

#[test]
fn test_notice_is_not_interactive() {
    let engine = SearchEngine::new(SearchIndex::default(), SearchConfig::default());
    let mut c = controller_over(engine);
    type_and_wait(&mut c, DESKTOP, "rust");

    assert!(matches!(c.view(DESKTOP), Some(ResultsView::Notice { .. })));
    assert_eq!(c.on_key(DESKTOP, Key::ArrowDown), KeyOutcome::Ignored);
    assert_eq!(c.on_key(DESKTOP, Key::Enter), KeyOutcome::Ignored);
    assert!(!c.on_click(DESKTOP, 0));
    assert!(c.navigator().visited.is_empty());
}

// ============================================================================
// SUBMIT AND TEARDOWN
// ============================================================================

#[test]
fn test_submit_goes_to_search_page() {
    let mut c = controller_over(fixture_engine());
    assert!(c.on_submit(DESKTOP, "  rust & wasm "));
    assert_eq!(c.navigator().visited, vec!["/search/?q=rust%20%26%20wasm"]);
}

#[test]
fn test_blank_submit_stays() {
    let mut c = controller_over(fixture_engine());
    assert!(!c.on_submit(DESKTOP, "   "));
    assert!(c.navigator().visited.is_empty());
}

#[test]
fn test_submit_cancels_pending_search() {
    let mut c = controller_over(fixture_engine());
    c.on_input(DESKTOP, "rust", Millis(0));
    c.on_submit(DESKTOP, "rust");
    c.tick(Millis(1_000));
    assert!(c.searcher().queries.borrow().is_empty());
}

#[test]
fn test_teardown_unbinds() {
    let mut c = three_results();
    c.teardown();
    assert_eq!(c.renderer().hidden, vec![DESKTOP]);
    assert!(!c.is_bound(DESKTOP));

    c.on_input(DESKTOP, "tokio", Millis(1_000));
    c.tick(Millis(5_000));
    assert_eq!(c.searcher().queries.borrow().len(), 1);
}
