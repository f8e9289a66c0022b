//! Custom cargo commands for the outcome crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (no model checking)
//!   cargo xtask kani      - Run Kani proofs only
//!   cargo xtask fuzz      - Run the combinator fuzz target briefly
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Minimum number of `INVARIANT:` markers expected under `src/`.
const MIN_INVARIANT_MARKERS: usize = 8;

/// Seconds of fuzzing per `cargo xtask fuzz` run.
const FUZZ_SECONDS: u32 = 60;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
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
  verify    Run full verification suite (markers + tests + clippy + Kani)
  test      Run all Rust tests (default features and --no-default-features)
  check     Quick check (cargo test + clippy, no Kani)
  kani      Run Kani proofs only
  fuzz      Fuzz combinator chains for {FUZZ_SECONDS}s (requires cargo-fuzz)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Outcome Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: Run tests
    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Kani
    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs verified\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests, with and without the serde feature
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run Kani proofs in the standalone proof crate
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");

    let probe = Command::new("cargo").args(["kani", "--version"]).output();
    if !matches!(probe, Ok(ref out) if out.status.success()) {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
        .context("Failed to run cargo kani")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Fuzz the combinator chain target for a fixed time budget
fn fuzz() -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", "combinator_chain", "--", &max_time])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("Fuzzing found a failure; see fuzz/artifacts/combinator_chain");
    }

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

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output
        .stdout
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .count();

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "Expected at least {} INVARIANT markers, found {}. Someone may have removed a law check!",
            MIN_INVARIANT_MARKERS,
            count
        );
    }

    Ok(())
}
