// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` turns a (query, entry) pair into a total score; `ranking` orders the
//! survivors. Scores are relative: they only mean something next to other
//! scores from the same query.

mod core;
pub mod ranking;

pub use core::*;
