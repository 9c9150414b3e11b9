use crate::commands::{print_summary, write_report};
use crate::store::FsBlobStore;
use crate::{BatchSummary, ItemReport};
use anyhow::{Context, Result};
use colored::*;
use indicatif::ProgressBar;
use qrchunk_core::pipeline::encode_chunk_scaled;
use qrchunk_core::storage::BlobStore;
use qrchunk_core::ChunkName;
use tracing::{error, info};

pub fn execute(
    dir: &str,
    scale: u32,
    remove_source: bool,
    progress: bool,
    report: Option<&str>,
) -> Result<BatchSummary> {
    info!("Encoding chunks in {}", dir);

    let store = FsBlobStore::new(dir);
    let blobs = store
        .list_blobs()
        .with_context(|| format!("Failed to enumerate directory: {}", dir))?;

    // Chunk sources are bare identifier names; anything else in the
    // directory (images, sidecar files) is left alone
    let chunks: Vec<ChunkName> = blobs
        .iter()
        .filter_map(|name| ChunkName::parse(name).ok())
        .collect();

    let mut summary = BatchSummary {
        skipped: blobs.len() - chunks.len(),
        ..Default::default()
    };

    info!(
        "Found {} chunks to encode ({} entries skipped)",
        chunks.len(),
        summary.skipped
    );

    let bar = if progress {
        ProgressBar::new(chunks.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    let emit = |line: String| {
        if progress {
            bar.println(line);
        } else {
            println!("{}", line);
        }
    };

    for name in &chunks {
        summary.processed += 1;

        match encode_chunk_scaled(&store, name, scale) {
            Ok(outcome) => {
                summary.succeeded += 1;
                emit(format!(
                    "{} {} -> {} ({} bytes)",
                    "✓".green(),
                    name,
                    outcome.image_name,
                    outcome.chunk_len
                ));
                summary.items.push(ItemReport {
                    source: name.as_str().to_string(),
                    output: Some(outcome.image_name),
                    error: None,
                });

                if remove_source {
                    // Two-phase contract: the source goes away only after
                    // its image is fully written
                    store.remove_blob(name.as_str())?;
                }
            }
            Err(err) => {
                summary.failed += 1;
                error!("Chunk {} failed: {}", name, err);
                emit(format!("{} {}: {}", "✗".red(), name, err));
                summary.items.push(ItemReport {
                    source: name.as_str().to_string(),
                    output: None,
                    error: Some(err.to_string()),
                });
            }
        }

        bar.inc(1);
    }

    bar.finish_and_clear();
    print_summary(&summary);

    if let Some(path) = report {
        write_report(path, &summary)?;
        info!("Report written to {}", path);
    }

    Ok(summary)
}
