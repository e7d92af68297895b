// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Why an index failed to load.
//!
//! None of these ever reach the user as an error: the loader logs them and
//! falls back to an empty index, which the engine reports as a notice.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("invalid index JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read index file: {0}")]
    Io(#[from] std::io::Error),

    #[error("index contains no documents")]
    EmptyCatalog,

    #[error("index contains only the debug placeholder record")]
    DebugSentinel,
}

impl LoadError {
    /// A one-line pointer at the usual cause, for the diagnostic log.
    pub fn hint(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "is the site being served, and is the base URL correct?",
            LoadError::Status(404) => {
                "index.json was not generated; add \"JSON\" to [outputs] home in the site config"
            }
            LoadError::Status(_) => "the server refused the index request",
            LoadError::Parse(_) => "the index template produced malformed JSON or unexpected fields",
            LoadError::Io(_) => "check the path to index.json",
            LoadError::EmptyCatalog => "no pages were published; check draft/future flags",
            LoadError::DebugSentinel => {
                "the index template found no pages to render; check the content directory"
            }
        }
    }
}
