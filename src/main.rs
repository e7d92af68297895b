// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitesift::controller::preview;
use sitesift::{FileSource, IndexLoader, SearchConfig, SearchEngine, SearchResult};

mod cli;
use cli::display::{clip, paint, terminal_highlight, timing_ms, Panel, Tone, TITLE_WIDTH};
use cli::inspect::CatalogStats;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            threshold,
            current_path,
            config,
            json,
        } => run_search(
            &index,
            &query,
            SearchOverrides {
                limit,
                threshold,
                current_path,
                config,
            },
            json,
        ),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

struct SearchOverrides {
    limit: Option<usize>,
    threshold: Option<f64>,
    current_path: Option<String>,
    config: Option<String>,
}

impl SearchOverrides {
    fn into_config(self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path))?;
                SearchConfig::from_json(&text).with_context(|| format!("parsing config {}", path))?
            }
            None => SearchConfig::default(),
        };
        if let Some(limit) = self.limit {
            config.max_results = limit;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(path) = self.current_path {
            config = config.with_current_path(path);
        }
        Ok(config)
    }
}

/// A directory is treated as a site root (`public/`); anything else as the
/// catalog file itself.
fn loader_for(path: &str) -> Result<IndexLoader<FileSource>> {
    let path = Path::new(path);
    if path.is_dir() {
        return Ok(IndexLoader::new(FileSource::new(path), ""));
    }
    let file = path
        .file_name()
        .and_then(|f| f.to_str())
        .with_context(|| format!("not a file path: {}", path.display()))?;
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(IndexLoader::at(FileSource::new(root), file))
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("starting runtime")?;
    Ok(runtime.block_on(future))
}

// ============================================================================
// SEARCH
// ============================================================================

fn run_search(index: &str, query: &str, overrides: SearchOverrides, json: bool) -> Result<()> {
    let config = overrides.into_config()?;
    let loader = loader_for(index)?;

    let load_start = Instant::now();
    let search_index = block_on(loader.load())?;
    let load_ms = load_start.elapsed().as_secs_f64() * 1000.0;

    let docs = search_index.len();
    let engine = SearchEngine::new(search_index, config);

    let search_start = Instant::now();
    let results = engine.search(query);
    let search_ms = search_start.elapsed().as_secs_f64() * 1000.0;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let panel = Panel::open(&format!("RESULTS for '{}'", query));
    print_results(&panel, &results, engine.config().preview_length);
    panel.divider("TIMING");
    panel.stat(&format!("load ({} docs)", docs), timing_ms(load_ms));
    panel.stat("search", timing_ms(search_ms));
    Ok(())
}

fn print_results(panel: &Panel, results: &[SearchResult], preview_chars: usize) {
    if results.is_empty() {
        panel.line(&format!("  {}", paint(Tone::Muted, "no matches")));
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        if result.is_notice() {
            panel.line(&format!("  {}", paint(Tone::Warn, &result.title)));
            panel.line(&format!("  {}", clip(&result.content, 76)));
            continue;
        }
        // Clipping would cut through escape codes, so long titles go unmarked
        let title = if result.title.chars().count() > TITLE_WIDTH {
            clip(&result.title, TITLE_WIDTH)
        } else {
            terminal_highlight(&result.highlight)
        };
        panel.hit(rank + 1, result.score, &title, &result.url, &preview(result, preview_chars));
    }
}

// ============================================================================
// INSPECT
// ============================================================================

fn run_inspect(index: &str) -> Result<()> {
    let loader = loader_for(index)?;
    let records = match block_on(loader.fetch_catalog())? {
        Ok(records) => records,
        Err(e) => bail!("{}: {} ({})", loader.url(), e, e.hint()),
    };
    let stats = CatalogStats::from_records(&records);

    {
        let panel = Panel::open(&format!("CATALOG {}", index));
        panel.stat("documents", stats.documents);
        panel.stat("title tokens", stats.title_tokens);
        panel.stat("content tokens", stats.content_tokens);
        panel.stat("distinct tags", stats.tags.len());
        panel.stat("categories", stats.categories.len());

        panel.divider("SECTIONS");
        for (section, count) in &stats.sections {
            panel.stat(section, count);
        }

        panel.divider("CHECKS");
        panel.check("missing summary", stats.missing_summary, false);
        panel.check("empty content", stats.empty_content, false);
        panel.check("duplicate ids", stats.duplicate_ids.len(), true);
        panel.check("duplicate urls", stats.duplicate_urls.len(), true);
        for dup in stats.duplicate_ids.iter().chain(&stats.duplicate_urls) {
            panel.line(&format!("    {}", paint(Tone::Bad, &clip(dup, 74))));
        }
    }

    if stats.has_errors() {
        bail!("catalog has duplicate entries");
    }
    Ok(())
}

