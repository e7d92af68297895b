// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser.
//!
//! The host page fetches `index.json` itself (it owns `fetch` and the base path)
//! and hands the body to [`SiteSearch::from_json`]. Two types are exported:
//! - `SiteSearch`: the loaded index plus the match engine
//! - `SearchController`: debounce, keyboard and click handling over a
//!   `SiteSearch`, talking back to the page through three JS callbacks
//!
//! Time comes from the host (`performance.now()`) on every event; the host
//! calls `tick` when the timer it armed for `nextDeadline()` fires.
//!
//! Load diagnostics go to the browser console through `tracing-wasm`, which
//! is installed the first time a `SiteSearch` is built.

use std::rc::Rc;
use std::sync::Once;

use js_sys::Function;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::config::SearchConfig;
use crate::controller::{
    InputKind, InteractionController, Key, KeyOutcome, Navigator, Renderer, ResultsView,
};
use crate::loader::{index_from_json, resolve_base_path};
use crate::search::SearchEngine;
use crate::types::{Millis, SearchIndex};

static LOGGING: Once = Once::new();

/// Route `tracing` events at INFO and above to the browser console.
///
/// Safe to call more than once. `fromJson` and `unavailable` call it, so a
/// bad `index.json` is always reported with its hint.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    LOGGING.call_once(|| {
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .set_report_logs_in_timings(false)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    });
}

fn read_options(options: JsValue) -> Result<SearchConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(SearchConfig::default());
    }
    from_value(options).map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}

fn input_kind(element_id: &str) -> Result<InputKind, JsValue> {
    InputKind::from_element_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown search input: {}", element_id)))
}

fn millis(now: f64) -> Millis {
    Millis(now.max(0.0) as u64)
}

/// The loaded index and the engine over it.
#[wasm_bindgen]
pub struct SiteSearch {
    engine: Rc<SearchEngine>,
}

#[wasm_bindgen]
impl SiteSearch {
    /// Build from the `index.json` body.
    ///
    /// Never throws for a bad catalog: malformed, empty, or placeholder-only
    /// bodies produce an empty index whose searches return the no-index
    /// notice. Throws only for unreadable `options`.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(catalog: &str, options: JsValue) -> Result<SiteSearch, JsValue> {
        init_logging();
        let config = read_options(options)?;
        Ok(SiteSearch {
            engine: Rc::new(SearchEngine::new(index_from_json(catalog), config)),
        })
    }

    /// An empty index, for when the fetch itself failed.
    #[wasm_bindgen]
    pub fn unavailable(options: JsValue) -> Result<SiteSearch, JsValue> {
        init_logging();
        tracing::warn!("index.json could not be fetched; search will show a notice");
        let config = read_options(options)?;
        Ok(SiteSearch {
            engine: Rc::new(SearchEngine::new(SearchIndex::default(), config)),
        })
    }

    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        to_value(&self.engine.search(query)).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.engine.index().len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.engine.index().is_empty()
    }
}

struct JsRenderer {
    render: Function,
    hide: Function,
}

impl Renderer for JsRenderer {
    fn show(&mut self, input: InputKind, view: &ResultsView) {
        let view = match to_value(view) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "could not convert results view");
                return;
            }
        };
        let id = JsValue::from_str(input.element_id());
        if let Err(e) = self.render.call2(&JsValue::NULL, &id, &view) {
            tracing::warn!(error = ?e, "render callback threw");
        }
    }

    fn hide(&mut self, input: InputKind) {
        let id = JsValue::from_str(input.element_id());
        if let Err(e) = self.hide.call1(&JsValue::NULL, &id) {
            tracing::warn!(error = ?e, "hide callback threw");
        }
    }
}

struct JsNavigator {
    navigate: Function,
}

impl Navigator for JsNavigator {
    fn navigate(&mut self, url: &str) {
        if let Err(e) = self.navigate.call1(&JsValue::NULL, &JsValue::from_str(url)) {
            tracing::warn!(error = ?e, "navigate callback threw");
        }
    }
}

/// Event handling for the page's search inputs.
///
/// Inputs are addressed by element id (`search-input`, `mobile-search-input`).
/// Callbacks: `render(inputId, view)`, `hide(inputId)`, `navigate(url)`.
#[wasm_bindgen]
pub struct SearchController {
    inner: InteractionController<Rc<SearchEngine>, JsRenderer, JsNavigator>,
}

#[wasm_bindgen]
impl SearchController {
    #[wasm_bindgen(constructor)]
    pub fn new(
        site: &SiteSearch,
        render: Function,
        hide: Function,
        navigate: Function,
    ) -> SearchController {
        let config = site.engine.config().clone();
        SearchController {
            inner: InteractionController::new(
                Rc::clone(&site.engine),
                JsRenderer { render, hide },
                JsNavigator { navigate },
                config,
            ),
        }
    }

    /// Start handling an input. Call only for ids present in the DOM.
    #[wasm_bindgen]
    pub fn bind(&mut self, input_id: &str) -> Result<(), JsValue> {
        self.inner.bind(input_kind(input_id)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = onInput)]
    pub fn on_input(&mut self, input_id: &str, text: &str, now: f64) -> Result<(), JsValue> {
        self.inner.on_input(input_kind(input_id)?, text, millis(now));
        Ok(())
    }

    /// When to call `tick` next, or `undefined` when nothing is pending.
    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.inner.next_deadline().map(|m| m.get() as f64)
    }

    #[wasm_bindgen]
    pub fn tick(&mut self, now: f64) {
        self.inner.tick(millis(now));
    }

    /// Returns `true` when the host should call `preventDefault()`.
    #[wasm_bindgen(js_name = onKey)]
    pub fn on_key(&mut self, input_id: &str, key: &str) -> Result<bool, JsValue> {
        let outcome = self.inner.on_key(input_kind(input_id)?, Key::from_dom(key));
        Ok(outcome == KeyOutcome::Handled)
    }

    #[wasm_bindgen(js_name = onHover)]
    pub fn on_hover(&mut self, input_id: &str, index: usize) -> Result<(), JsValue> {
        self.inner.on_hover(input_kind(input_id)?, index);
        Ok(())
    }

    #[wasm_bindgen(js_name = onClick)]
    pub fn on_click(&mut self, input_id: &str, index: usize) -> Result<bool, JsValue> {
        Ok(self.inner.on_click(input_kind(input_id)?, index))
    }

    #[wasm_bindgen(js_name = onOutsideClick)]
    pub fn on_outside_click(&mut self, input_id: &str) -> Result<(), JsValue> {
        self.inner.on_outside_click(input_kind(input_id)?);
        Ok(())
    }

    /// The host always suppresses native form submission and calls this.
    #[wasm_bindgen(js_name = onSubmit)]
    pub fn on_submit(&mut self, input_id: &str, text: &str) -> Result<bool, JsValue> {
        Ok(self.inner.on_submit(input_kind(input_id)?, text))
    }

    #[wasm_bindgen]
    pub fn teardown(&mut self) {
        self.inner.teardown();
    }
}

/// Base path for `index.json` from the `site-base-url` meta tag and the
/// page's hostname.
#[wasm_bindgen(js_name = resolveBasePath)]
pub fn resolve_base_path_js(meta: Option<String>, host: &str) -> String {
    resolve_base_path(meta.as_deref(), host)
}
