// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! The index is built, the weights are configured. Now a query comes in and
//! gets scored against every page. `engine` does the scan, `highlight` turns
//! the raw query into safe patterns and marked-up titles.

pub mod engine;
pub mod highlight;

pub use engine::{SearchEngine, Searcher, MIN_QUERY_CHARS};
