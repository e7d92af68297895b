//! Custom cargo commands for sitesift.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask wasm      - Build the browser package with wasm-pack
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Feature sets that must each build on their own.
const FEATURE_MATRIX: &[&[&str]] = &[
    &["--no-default-features"],
    &["--no-default-features", "--features", "parallel"],
    &["--no-default-features", "--features", "unicode-normalization"],
    &["--features", "http"],
];

const WASM_FEATURES: &[&str] = &["--no-default-features", "--features", "wasm,unicode-normalization"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("wasm") => wasm()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (features, tests, wasm, fixture)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  wasm      Build pkg/ for the Hugo theme with wasm-pack
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sitesift Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking feature combinations...");
    for features in FEATURE_MATRIX {
        let mut args = vec!["check", "--quiet", "--lib"];
        args.extend_from_slice(features);
        run_cargo(&args)?;
    }
    println!("✓ All feature combinations build\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Checking wasm32 build...");
    let mut args = vec!["check", "--quiet", "--lib", "--target", "wasm32-unknown-unknown"];
    args.extend_from_slice(WASM_FEATURES);
    run_cargo(&args)?;
    println!("✓ wasm32 build checks\n");

    println!("[5/5] Inspecting fixture catalog...");
    run_cargo(&["run", "--quiet", "--", "inspect", "fixtures/index.json"])?;
    println!("✓ Fixture catalog is clean\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Build the browser package into pkg/
fn wasm() -> Result<()> {
    let root = project_root()?;
    let mut args = vec!["build", "--target", "web", "--release", "--out-dir", "pkg", "--"];
    args.extend_from_slice(WASM_FEATURES);

    let status = Command::new("wasm-pack")
        .args(&args)
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (install with `cargo install wasm-pack`)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ Browser package written to pkg/");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
