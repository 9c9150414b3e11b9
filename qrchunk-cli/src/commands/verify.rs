use crate::commands::print_summary;
use crate::store::FsBlobStore;
use crate::{BatchSummary, ItemReport};
use anyhow::{Context, Result};
use colored::*;
use qrchunk_core::storage::BlobStore;
use qrchunk_core::{symbol, textsafe, ChunkName};
use tracing::{info, warn};

/// Round-trip every chunk through the codec in memory, writing nothing
pub fn execute(dir: &str) -> Result<BatchSummary> {
    info!("Verifying chunks in {}", dir);

    let store = FsBlobStore::new(dir);
    let blobs = store
        .list_blobs()
        .with_context(|| format!("Failed to enumerate directory: {}", dir))?;

    let chunks: Vec<ChunkName> = blobs
        .iter()
        .filter_map(|name| ChunkName::parse(name).ok())
        .collect();

    let mut summary = BatchSummary {
        skipped: blobs.len() - chunks.len(),
        ..Default::default()
    };

    println!("=== Verification ===");

    for name in &chunks {
        summary.processed += 1;

        match round_trip_check(&store, name) {
            Ok(len) => {
                summary.succeeded += 1;
                println!("{} {} ({} bytes)", "✓".green(), name, len);
                summary.items.push(ItemReport {
                    source: name.as_str().to_string(),
                    output: None,
                    error: None,
                });
            }
            Err(reason) => {
                summary.failed += 1;
                warn!("Chunk {} would not survive: {}", name, reason);
                println!("{} {}: {}", "✗".red(), name, reason);
                summary.items.push(ItemReport {
                    source: name.as_str().to_string(),
                    output: None,
                    error: Some(reason),
                });
            }
        }
    }

    print_summary(&summary);

    if summary.failed == 0 {
        println!("{} Every chunk survives the image round trip", "✓".green());
    } else {
        println!(
            "{} {} chunks would not survive conversion",
            "✗".red(),
            summary.failed
        );
    }

    Ok(summary)
}

/// Encode, render, read and decode one chunk entirely in memory
fn round_trip_check(store: &FsBlobStore, name: &ChunkName) -> Result<usize, String> {
    let data = store.read_blob(name.as_str()).map_err(|e| e.to_string())?;

    let payload = textsafe::encode(&data);
    let image = symbol::render(&payload).map_err(|e| e.to_string())?;
    let read_back = symbol::read(&image).map_err(|e| e.to_string())?;
    let decoded = textsafe::decode(&read_back).map_err(|e| e.to_string())?;

    if decoded != data {
        return Err("round trip produced different bytes".to_string());
    }

    Ok(data.len())
}
