// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where `index.json` lives.
//!
//! Hugo sites deployed under a sub-path (`https://example.org/blog/`) publish
//! the base URL in `<meta name="site-base-url">`. Local `hugo server` usually
//! serves from the root, so a missing tag on a local host means "no prefix".

/// Name of the `<meta>` tag carrying the site base URL.
pub const BASE_URL_META: &str = "site-base-url";

/// File name of the catalog under the base path.
pub const INDEX_FILE: &str = "index.json";

/// Is `host` a development host (`hugo server`, LAN preview)?
///
/// `host` may carry a port (`localhost:1313`).
pub fn is_local_host(host: &str) -> bool {
    let host = host.trim().to_ascii_lowercase();
    let name = if let Some(bracketed) = host.strip_prefix('[') {
        // [::1]:1313
        bracketed.split(']').next().unwrap_or_default()
    } else if host.matches(':').count() > 1 {
        // bare IPv6 without port
        host.as_str()
    } else {
        host.split(':').next().unwrap_or_default()
    };

    matches!(name, "localhost" | "127.0.0.1" | "0.0.0.0" | "::1")
        || name.ends_with(".localhost")
        || name.ends_with(".local")
}

/// Base path prefix for site resources, without a trailing slash.
///
/// Uses the meta tag content when present and non-blank. Otherwise returns
/// `""`; on a non-local host that is probably a template mistake, so it is
/// logged.
pub fn resolve_base_path(meta: Option<&str>, host: &str) -> String {
    match meta.map(str::trim).filter(|m| !m.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => {
            if !is_local_host(host) {
                tracing::warn!(
                    host,
                    "no <meta name=\"{}\"> tag; assuming the site is served from the root",
                    BASE_URL_META
                );
            }
            String::new()
        }
    }
}

/// `<base_path>/index.json`.
pub fn index_url(base_path: &str) -> String {
    format!("{}/{}", base_path.trim_end_matches('/'), INDEX_FILE)
}
