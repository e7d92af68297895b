// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random event streams against the interaction controller.
//!
//! Any interleaving of typing, timer ticks, keys, hovers and clicks must keep
//! the selection in range and only ever navigate to real result URLs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesift::testing::make_index;
use sitesift::{
    InputKind, InteractionController, Key, Millis, Navigator, Renderer, ResultsView,
    SearchConfig, SearchEngine, INERT_URL,
};

#[derive(Debug, Arbitrary)]
enum Event {
    Type { mobile: bool, text: String, advance: u16 },
    Tick { advance: u16 },
    Key { mobile: bool, key: u8 },
    Hover { mobile: bool, index: u8 },
    Click { mobile: bool, index: u8 },
    Outside { mobile: bool },
    Submit { mobile: bool, text: String },
}

struct NullRenderer;

impl Renderer for NullRenderer {
    fn show(&mut self, _: InputKind, view: &ResultsView) {
        if let Some(active) = view.active() {
            assert!(active < view.interactive_len());
        }
    }
    fn hide(&mut self, _: InputKind) {}
}

#[derive(Default)]
struct UrlLog(Vec<String>);

impl Navigator for UrlLog {
    fn navigate(&mut self, url: &str) {
        assert_ne!(url, INERT_URL);
        self.0.push(url.to_string());
    }
}

fn kind(mobile: bool) -> InputKind {
    if mobile {
        InputKind::Mobile
    } else {
        InputKind::Desktop
    }
}

fuzz_target!(|events: Vec<Event>| {
    let engine = SearchEngine::new(
        make_index(&[
            ("Async Rust Patterns", "futures executors pinning"),
            ("Rust Basics", "ownership borrowing"),
            ("Sourdough Diary", "flour water salt"),
        ]),
        SearchConfig::default(),
    );
    let mut c = InteractionController::new(engine, NullRenderer, UrlLog::default(), SearchConfig::default());
    c.bind(InputKind::Desktop);
    c.bind(InputKind::Mobile);

    let mut now = Millis(0);
    for event in events.into_iter().take(200) {
        match event {
            Event::Type { mobile, text, advance } => {
                now = now.after(u64::from(advance));
                let text: String = text.chars().take(100).collect();
                c.on_input(kind(mobile), &text, now);
            }
            Event::Tick { advance } => {
                now = now.after(u64::from(advance));
                c.tick(now);
            }
            Event::Key { mobile, key } => {
                let key = match key % 5 {
                    0 => Key::ArrowDown,
                    1 => Key::ArrowUp,
                    2 => Key::Enter,
                    3 => Key::Escape,
                    _ => Key::Other,
                };
                c.on_key(kind(mobile), key);
            }
            Event::Hover { mobile, index } => c.on_hover(kind(mobile), usize::from(index)),
            Event::Click { mobile, index } => {
                c.on_click(kind(mobile), usize::from(index));
            }
            Event::Outside { mobile } => c.on_outside_click(kind(mobile)),
            Event::Submit { mobile, text } => {
                c.on_submit(kind(mobile), &text);
            }
        }

        for input in InputKind::ALL {
            if let Some(view) = c.view(input) {
                if let Some(active) = view.active() {
                    assert!(active < view.interactive_len());
                }
            }
        }
    }
});
