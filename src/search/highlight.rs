// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query patterns built from untrusted input.
//!
//! The query goes through `regex::escape` before it touches a pattern, so
//! `a(b`, `[`, `\` and friends are literals. Compilation can still fail on
//! absurdly long queries (regex size limit); callers get `None` and skip the
//! signal instead of panicking.

use crate::utils::escape_html;
use regex::{Regex, RegexBuilder};

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Case-insensitive literal match of the query anywhere.
pub fn literal_pattern(query: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Case-insensitive literal match of the query starting at a word boundary.
pub fn word_boundary_pattern(query: &str) -> Option<Regex> {
    RegexBuilder::new(&format!(r"\b{}", regex::escape(query)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Wrap every match of `pattern` in `title` with `<mark>`, escaping the rest.
///
/// With no pattern the title is returned escaped and unmarked.
pub fn highlight(title: &str, pattern: Option<&Regex>) -> String {
    let Some(pattern) = pattern else {
        return escape_html(title);
    };

    let mut out = String::with_capacity(title.len() + 16);
    let mut last = 0;
    for m in pattern.find_iter(title) {
        if m.is_empty() {
            continue;
        }
        out.push_str(&escape_html(&title[last..m.start()]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(m.as_str()));
        out.push_str(MARK_CLOSE);
        last = m.end();
    }
    out.push_str(&escape_html(&title[last..]));
    out
}
