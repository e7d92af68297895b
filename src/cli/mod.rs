// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesift command-line interface.
//!
//! Two subcommands, both over a site's generated `index.json`: `search` runs
//! the same matcher the browser runs, `inspect` checks the catalog for the
//! problems that make browser search silently degrade.

pub mod display;
pub mod inspect;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sitesift",
    about = "Fuzzy search over a Hugo site's index.json",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index and display ranked results
    Search {
        /// Path to index.json, or the directory containing it (e.g. public/)
        index: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Drop results scoring at or below this
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Page path doing the search; it is excluded from results
        #[arg(long)]
        current_path: Option<String>,

        /// JSON config file (same shape as the browser options object)
        #[arg(short, long)]
        config: Option<String>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check an index.json for problems
    Inspect {
        /// Path to index.json, or the directory containing it
        index: String,
    },
}
