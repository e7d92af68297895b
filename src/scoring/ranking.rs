// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! Higher total score first. Equal scores keep catalog order: the earlier page
//! in `index.json` wins. That tie-break is spelled out in the comparator rather
//! than left to sort stability, so it survives any future change of sort.

use std::cmp::Ordering;

/// A document that survived the threshold, before it becomes a `SearchResult`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Position of the entry in the index (insertion order).
    pub position: usize,
    pub score: f64,
}

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Position** - ascending (earlier catalog entry wins)
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort candidates best-first and keep the top `limit`.
pub fn rank(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_unstable_by(compare_candidates);
    candidates.truncate(limit);
    candidates
}
