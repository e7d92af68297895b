// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! One primitive does the heavy lifting: [`fuzzy_score`], an in-order
//! subsequence match that rewards contiguity. Everything else is that primitive
//! applied at different granularities and added up with weights:
//!
//! ```text
//! total = whole_text   × fuzzy(query, search_text)
//!       + title_word   × Σ fuzzy(qword, tword)
//!       + content_word × Σ fuzzy(qword, cword)
//!       + exact_title     (title contains query verbatim)
//!       + word_boundary   (query starts at a word boundary in title or content)
//! ```
//!
//! # Fuzzy score
//!
//! A pattern `P` matches text `T` when every char of `P` appears in `T` in
//! order. The score is the sum of three terms:
//!
//! | Term | Formula | Rewards |
//! |------|---------|---------|
//! | length ratio | `\|P\| / \|T\|` | short texts that are mostly pattern |
//! | run bonus | `longest_run / \|P\|` | contiguous matches |
//! | density | `raw / (\|T\| × \|P\|)` | long streaks, quadratically |
//!
//! `raw` grows by the current streak length on each matched char: a streak of
//! three contributes 1 + 2 + 3. A single unmatched pattern char zeroes the
//! whole score.

use crate::config::ScoringWeights;

/// Score `pattern` as an in-order subsequence of `text`.
///
/// Both inputs are expected to be normalized already. Lengths are counted in
/// chars, so non-ASCII text scores the same way as ASCII. Returns 0.0 when the
/// match fails or either side is empty.
///
/// # Example
///
/// ```
/// use sitesift::fuzzy_score;
///
/// assert!(fuzzy_score("rst", "rust") > 0.0);
/// assert_eq!(fuzzy_score("tsur", "rust"), 0.0);
/// assert!(fuzzy_score("rust", "rust") > fuzzy_score("rust", "robust"));
/// ```
pub fn fuzzy_score(pattern: &str, text: &str) -> f64 {
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return 0.0;
    }

    let mut next = 0usize;
    let mut text_len = 0usize;
    let mut streak = 0usize;
    let mut longest_run = 0usize;
    let mut raw = 0usize;

    for c in text.chars() {
        text_len += 1;
        if next == pattern.len() {
            // Pattern exhausted; keep counting for |T|
            continue;
        }
        if c == pattern[next] {
            streak += 1;
            raw += streak;
            longest_run = longest_run.max(streak);
            next += 1;
        } else {
            streak = 0;
        }
    }

    if next < pattern.len() || text_len == 0 {
        return 0.0;
    }

    let p = pattern.len() as f64;
    let t = text_len as f64;
    p / t + longest_run as f64 / p + raw as f64 / (t * p)
}

/// Sum of [`fuzzy_score`] over every (query word, field word) pair.
pub fn word_pair_score(query_words: &[String], field_words: &[String]) -> f64 {
    query_words
        .iter()
        .flat_map(|q| field_words.iter().map(move |w| fuzzy_score(q, w)))
        .sum()
}

/// The raw signals for one candidate, before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Signals {
    pub whole_text: f64,
    pub title_words: f64,
    pub content_words: f64,
    pub exact_title: bool,
    pub word_boundary: bool,
}

/// Combine the signals into one total with the configured weights.
pub fn combine(signals: &Signals, weights: &ScoringWeights) -> f64 {
    let mut total = signals.whole_text * weights.whole_text
        + signals.title_words * weights.title_word
        + signals.content_words * weights.content_word;
    if signals.exact_title {
        total += weights.exact_title;
    }
    if signals.word_boundary {
        total += weights.word_boundary;
    }
    total
}
