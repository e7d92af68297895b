// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search box: debounced input, a results dropdown, keyboard and mouse.
//!
//! One [`InteractionController`] per page, built after the index loads and
//! torn down on navigation. It owns no DOM: drawing goes through [`Renderer`],
//! leaving the page through [`Navigator`], and time arrives as [`Millis`] on
//! every event. That keeps the whole state machine testable without a browser.
//!
//! # State per input
//!
//! ```text
//!        keystroke (≥ 2 chars)           deadline passes
//! Idle ───────────────────────▶ Debouncing ──────────────▶ Shown
//!  ▲                               │  ▲ keystroke            │
//!  │         short query           │  └─(restarts timer)     │
//!  ├───────────────────────────────┘                         │
//!  └──────────── outside click / Escape / navigation ────────┘
//! ```
//!
//! A new keystroke always restarts the timer, so at most one search is pending
//! per input and only the last keystroke's query ever runs.

mod debounce;
mod navigation;
mod view;

pub use debounce::Debouncer;
pub use navigation::{step_down, step_up, Key};
pub use view::{build_view, preview, ResultItem, ResultsView};

use crate::config::SearchConfig;
use crate::search::{Searcher, MIN_QUERY_CHARS};
use crate::types::{Millis, INERT_URL};

/// Which search box an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Desktop,
    Mobile,
}

impl InputKind {
    pub const ALL: [InputKind; 2] = [InputKind::Desktop, InputKind::Mobile];

    /// DOM id of the `<input>` element.
    pub fn element_id(self) -> &'static str {
        match self {
            InputKind::Desktop => "search-input",
            InputKind::Mobile => "mobile-search-input",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        InputKind::ALL.into_iter().find(|k| k.element_id() == id)
    }
}

/// Lifecycle of one bound input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxState {
    Idle,
    Debouncing,
    Shown,
}

/// Whether the host should suppress the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

/// Draws and hides the results container under an input.
pub trait Renderer {
    fn show(&mut self, input: InputKind, view: &ResultsView);
    fn hide(&mut self, input: InputKind);
}

/// Leaves the page.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

#[derive(Debug)]
struct SearchBox {
    kind: InputKind,
    debouncer: Debouncer<String>,
    /// `Some` while the dropdown is visible.
    view: Option<ResultsView>,
}

impl SearchBox {
    fn state(&self) -> BoxState {
        if self.debouncer.is_pending() {
            BoxState::Debouncing
        } else if self.view.is_some() {
            BoxState::Shown
        } else {
            BoxState::Idle
        }
    }
}

fn find_box(boxes: &mut [SearchBox], kind: InputKind) -> Option<&mut SearchBox> {
    boxes.iter_mut().find(|b| b.kind == kind)
}

/// Binds search inputs to a [`Searcher`].
pub struct InteractionController<S, R, N> {
    searcher: S,
    renderer: R,
    navigator: N,
    config: SearchConfig,
    boxes: Vec<SearchBox>,
}

impl<S: Searcher, R: Renderer, N: Navigator> InteractionController<S, R, N> {
    pub fn new(searcher: S, renderer: R, navigator: N, config: SearchConfig) -> Self {
        Self {
            searcher,
            renderer,
            navigator,
            config,
            boxes: Vec::new(),
        }
    }

    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Start handling events for `kind`. Call only for inputs present on the page.
    pub fn bind(&mut self, kind: InputKind) {
        if self.boxes.iter().all(|b| b.kind != kind) {
            self.boxes.push(SearchBox {
                kind,
                debouncer: Debouncer::new(self.config.debounce_ms),
                view: None,
            });
        }
    }

    pub fn is_bound(&self, kind: InputKind) -> bool {
        self.boxes.iter().any(|b| b.kind == kind)
    }

    /// `None` for unbound inputs.
    pub fn state(&self, kind: InputKind) -> Option<BoxState> {
        self.boxes.iter().find(|b| b.kind == kind).map(SearchBox::state)
    }

    /// The view currently on screen for `kind`.
    pub fn view(&self, kind: InputKind) -> Option<&ResultsView> {
        self.boxes
            .iter()
            .find(|b| b.kind == kind)
            .and_then(|b| b.view.as_ref())
    }

    /// Earliest pending search deadline, for the host's timer.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.boxes.iter().filter_map(|b| b.debouncer.deadline()).min()
    }

    /// The input's text changed.
    pub fn on_input(&mut self, kind: InputKind, text: &str, now: Millis) {
        let Some(b) = find_box(&mut self.boxes, kind) else {
            return;
        };
        let query = text.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            b.debouncer.cancel();
            b.view = None;
            self.renderer.hide(kind);
            return;
        }
        b.debouncer.schedule(query.to_string(), now);
    }

    /// Run every search whose quiet period has elapsed.
    pub fn tick(&mut self, now: Millis) {
        for b in self.boxes.iter_mut() {
            let Some(query) = b.debouncer.poll(now) else {
                continue;
            };
            let results = self.searcher.search(&query);
            let view = build_view(&query, &results, self.config.preview_length);
            self.renderer.show(b.kind, &view);
            b.view = Some(view);
        }
    }

    pub fn on_key(&mut self, kind: InputKind, key: Key) -> KeyOutcome {
        let Some(b) = find_box(&mut self.boxes, kind) else {
            return KeyOutcome::Ignored;
        };

        match key {
            Key::Escape => {
                if b.view.take().is_some() {
                    self.renderer.hide(kind);
                    KeyOutcome::Handled
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::ArrowDown | Key::ArrowUp => {
                let Some(ResultsView::Results { items, active }) = b.view.as_mut() else {
                    return KeyOutcome::Ignored;
                };
                if items.is_empty() {
                    return KeyOutcome::Ignored;
                }
                *active = if key == Key::ArrowDown {
                    step_down(*active, items.len())
                } else {
                    step_up(*active, items.len())
                };
                if let Some(view) = b.view.as_ref() {
                    self.renderer.show(kind, view);
                }
                KeyOutcome::Handled
            }
            Key::Enter => {
                let url = match b.view.as_ref() {
                    Some(ResultsView::Results {
                        items,
                        active: Some(i),
                    }) => items.get(*i).map(|item| item.url.clone()),
                    _ => None,
                };
                match url {
                    Some(url) if url != INERT_URL => {
                        self.go(&url);
                        KeyOutcome::Handled
                    }
                    _ => KeyOutcome::Ignored,
                }
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Pointer entered row `index`.
    pub fn on_hover(&mut self, kind: InputKind, index: usize) {
        let Some(b) = find_box(&mut self.boxes, kind) else {
            return;
        };
        let Some(ResultsView::Results { items, active }) = b.view.as_mut() else {
            return;
        };
        if index >= items.len() || *active == Some(index) {
            return;
        }
        *active = Some(index);
        if let Some(view) = b.view.as_ref() {
            self.renderer.show(kind, view);
        }
    }

    /// Row `index` was clicked. Returns whether the page is navigating away.
    pub fn on_click(&mut self, kind: InputKind, index: usize) -> bool {
        let Some(b) = find_box(&mut self.boxes, kind) else {
            return false;
        };
        let url = match b.view.as_ref() {
            Some(ResultsView::Results { items, .. }) => items.get(index).map(|i| i.url.clone()),
            _ => None,
        };
        match url {
            Some(url) if url != INERT_URL => {
                self.go(&url);
                true
            }
            _ => false,
        }
    }

    /// A click landed outside both the input and its results container.
    pub fn on_outside_click(&mut self, kind: InputKind) {
        if let Some(b) = find_box(&mut self.boxes, kind) {
            if b.view.take().is_some() {
                self.renderer.hide(kind);
            }
        }
    }

    /// The enclosing form was submitted.
    ///
    /// The browser's own submission is always suppressed; a non-blank query
    /// goes to the full results page instead. Returns whether it navigated.
    pub fn on_submit(&mut self, kind: InputKind, text: &str) -> bool {
        if !self.is_bound(kind) {
            return false;
        }
        let query = text.trim();
        if query.is_empty() {
            return false;
        }
        let url = search_page_url(&self.config.search_page_path, query);
        self.go(&url);
        true
    }

    /// Unbind every input and hide its dropdown.
    pub fn teardown(&mut self) {
        for b in self.boxes.drain(..) {
            if b.view.is_some() {
                self.renderer.hide(b.kind);
            }
        }
    }

    /// Leave the page: every dropdown closes and pending searches die with it.
    fn go(&mut self, url: &str) {
        tracing::debug!(url, "navigating");
        self.navigator.navigate(url);
        for b in self.boxes.iter_mut() {
            b.debouncer.cancel();
            if b.view.take().is_some() {
                self.renderer.hide(b.kind);
            }
        }
    }
}

/// `<search_page_path>?q=<percent-encoded query>`.
pub fn search_page_url(search_page_path: &str, query: &str) -> String {
    format!("{}?q={}", search_page_path, urlencoding::encode(query))
}
