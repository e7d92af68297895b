// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where catalog bytes come from.
//!
//! In the browser the host fetches `index.json` itself and hands the text to
//! [`parse_catalog`](super::parse_catalog). Native callers go through a
//! [`CatalogSource`]: files on disk for the CLI, HTTP behind the `http`
//! feature.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::LoadError;

/// Fetches the raw catalog body for a URL.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, LoadError>;
}

/// Serves URLs from a directory, the way `hugo` lays out `public/`.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, url: &str) -> PathBuf {
        self.root.join(url.trim_start_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let path = self.resolve(url);

        #[cfg(feature = "cli")]
        let body = tokio::fs::read_to_string(path).await?;

        // No runtime without `cli`: the read blocks the caller's executor
        #[cfg(not(feature = "cli"))]
        let body = std::fs::read_to_string(path)?;

        Ok(body)
    }
}

/// Fetches over HTTP from a site origin.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    origin: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    /// `origin` is prepended to relative URLs (`https://example.org`).
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.origin, url)
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let response = self
            .client
            .get(self.absolute(url))
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }
}
