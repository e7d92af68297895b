// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog health report for `sitesift inspect`.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use sitesift::{words, DocumentRecord};

/// Counts and problems found in a parsed catalog.
#[derive(Debug, Default)]
pub struct CatalogStats {
    pub documents: usize,
    pub title_tokens: usize,
    pub content_tokens: usize,
    pub tags: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub sections: BTreeMap<String, usize>,
    pub missing_summary: usize,
    pub empty_content: usize,
    pub duplicate_ids: Vec<String>,
    pub duplicate_urls: Vec<String>,
}

impl CatalogStats {
    pub fn from_records(records: &[DocumentRecord]) -> Self {
        let mut stats = CatalogStats {
            documents: records.len(),
            ..Default::default()
        };
        let mut ids: HashMap<&str, usize> = HashMap::new();
        let mut urls: HashMap<&str, usize> = HashMap::new();

        for record in records {
            stats.title_tokens += words(&record.title).len();
            stats.content_tokens += words(&record.content).len();
            stats.tags.extend(record.tags.iter().cloned());
            stats.categories.extend(record.categories.iter().cloned());

            let section = record.section.as_deref().unwrap_or("(none)");
            *stats.sections.entry(section.to_string()).or_default() += 1;

            if record.summary.as_deref().map_or(true, |s| s.trim().is_empty()) {
                stats.missing_summary += 1;
            }
            if record.content.trim().is_empty() {
                stats.empty_content += 1;
            }
            *ids.entry(&record.id).or_default() += 1;
            *urls.entry(&record.url).or_default() += 1;
        }

        stats.duplicate_ids = repeated(ids);
        stats.duplicate_urls = repeated(urls);
        stats
    }

    /// Problems worth a nonzero exit in CI.
    pub fn has_errors(&self) -> bool {
        !self.duplicate_ids.is_empty() || !self.duplicate_urls.is_empty()
    }
}

fn repeated(counts: HashMap<&str, usize>) -> Vec<String> {
    let mut dups: Vec<String> = counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(k, _)| k.to_string())
        .collect();
    dups.sort();
    dups
}
