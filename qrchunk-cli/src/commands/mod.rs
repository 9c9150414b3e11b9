//! CLI subcommand implementations

pub mod decode;
pub mod encode;
pub mod verify;

use crate::BatchSummary;
use anyhow::{Context, Result};
use colored::*;
use std::fs;

/// Write the batch summary as a JSON report
pub(crate) fn write_report(path: &str, summary: &BatchSummary) -> Result<()> {
    let json =
        serde_json::to_string_pretty(summary).context("Failed to serialize batch report")?;
    fs::write(path, json).with_context(|| format!("Failed to write report file: {}", path))?;
    Ok(())
}

/// Print the closing batch summary
pub(crate) fn print_summary(summary: &BatchSummary) {
    println!("\n=== Batch Summary ===");
    println!("Processed: {}", summary.processed);
    println!("Succeeded: {}", summary.succeeded.to_string().green());
    if summary.failed > 0 {
        println!("Failed:    {}", summary.failed.to_string().red());
    } else {
        println!("Failed:    {}", summary.failed);
    }
    if summary.skipped > 0 {
        println!("Skipped:   {}", summary.skipped);
    }
}
