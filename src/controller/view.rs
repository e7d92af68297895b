// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the dropdown shows, as plain data.
//!
//! The controller never touches the DOM. It hands a [`ResultsView`] to the
//! renderer, which decides how to draw it.

use serde::Serialize;

use crate::types::SearchResult;
use crate::utils::truncate_chars;

/// One clickable row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub id: String,
    /// Title HTML with the query marked.
    pub highlight: String,
    pub preview: String,
    pub url: String,
}

/// The dropdown's content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultsView {
    /// Ranked hits; `active` is the keyboard/hover selection.
    Results {
        items: Vec<ResultItem>,
        active: Option<usize>,
    },
    /// The query ran and nothing matched.
    NoMatches { query: String, message: String },
    /// The index is unavailable. Plain text, not interactive.
    Notice { title: String, message: String },
}

impl ResultsView {
    /// Number of rows that react to keys, hover and clicks.
    pub fn interactive_len(&self) -> usize {
        match self {
            ResultsView::Results { items, .. } => items.len(),
            _ => 0,
        }
    }

    pub fn active(&self) -> Option<usize> {
        match self {
            ResultsView::Results { active, .. } => *active,
            _ => None,
        }
    }
}

/// Preview text: the summary when there is one, else the content, cut to
/// `max_chars` with `...` when cut.
pub fn preview(result: &SearchResult, max_chars: usize) -> String {
    let text = result
        .summary
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(&result.content);
    truncate_chars(text.trim(), max_chars)
}

/// Turn one query's results into a view.
pub fn build_view(query: &str, results: &[SearchResult], preview_chars: usize) -> ResultsView {
    if let Some(notice) = results.iter().find(|r| r.is_notice()) {
        return ResultsView::Notice {
            title: notice.title.clone(),
            message: notice.content.clone(),
        };
    }

    if results.is_empty() {
        return ResultsView::NoMatches {
            query: query.to_string(),
            message: format!("No results found for '{}'", query),
        };
    }

    ResultsView::Results {
        items: results
            .iter()
            .map(|r| ResultItem {
                id: r.id.clone(),
                highlight: r.highlight.clone(),
                preview: preview(r, preview_chars),
                url: r.url.clone(),
            })
            .collect(),
        active: None,
    }
}
