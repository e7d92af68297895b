// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog parsing under adversarial input.
//!
//! `index.json` comes over the network. A truncated or hand-edited file must
//! end in a `LoadError` (and an empty index), never a crash.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesift::{loader::index_from_json, parse_catalog, DEBUG_SENTINEL_ID};

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);

    match parse_catalog(&body) {
        Ok(records) => {
            // Accepted catalogs are never empty and never the lone placeholder
            assert!(!records.is_empty());
            assert!(!(records.len() == 1 && records[0].id == DEBUG_SENTINEL_ID));
            assert_eq!(index_from_json(&body).len(), records.len());
        }
        Err(_) => assert!(index_from_json(&body).is_empty()),
    }
});
