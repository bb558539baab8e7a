use anyhow::{Context, Result};
use std::path::Path;

use comprehensive_coa::{build, emit, fingerprint, summarize, IntegrityChecker, DEFAULT_OUTPUT_FILE};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter("comprehensive_coa=warn")
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run()
}

fn run() -> Result<()> {
    let output = Path::new(DEFAULT_OUTPUT_FILE);

    // 1. Build
    let document = build().context("Failed to build chart of accounts")?;

    // 2. Check (reported, never corrected)
    let report = IntegrityChecker::new().check(document.accounts());
    if !report.is_clean() {
        report.log();
        tracing::warn!("{}", report.summary());
    }

    // 3. Write
    emit(&document, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(sha256 = %fingerprint(&document)?, "chart fingerprint");

    // 4. Report
    println!(
        "Generated comprehensive CoA with {} accounts",
        document.account_count()
    );
    println!("File saved to: {}", output.display());

    println!("\nAccount breakdown by type:");
    for (account_type, count) in summarize(document.accounts()) {
        println!("  {}: {} accounts", account_type, count);
    }

    Ok(())
}
