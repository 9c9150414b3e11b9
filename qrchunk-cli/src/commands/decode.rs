use crate::commands::{print_summary, write_report};
use crate::store::FsBlobStore;
use crate::{BatchSummary, ItemReport};
use anyhow::{Context, Result};
use colored::*;
use indicatif::ProgressBar;
use qrchunk_core::pipeline::decode_image;
use qrchunk_core::storage::BlobStore;
use qrchunk_core::ChunkName;
use tracing::{error, info};

pub fn execute(
    dir: &str,
    remove_source: bool,
    progress: bool,
    report: Option<&str>,
) -> Result<BatchSummary> {
    info!("Decoding symbol images in {}", dir);

    let store = FsBlobStore::new(dir);
    let blobs = store
        .list_blobs()
        .with_context(|| format!("Failed to enumerate directory: {}", dir))?;

    // Only <identifier>.png entries take part; everything else is left
    // alone
    let total = blobs.len();
    let images: Vec<String> = blobs
        .into_iter()
        .filter(|name| ChunkName::from_image_name(name).is_ok())
        .collect();

    let mut summary = BatchSummary {
        skipped: total - images.len(),
        ..Default::default()
    };

    info!("Found {} images to decode", images.len());

    let bar = if progress {
        ProgressBar::new(images.len() as u64)
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

    for image_name in &images {
        summary.processed += 1;

        match decode_image(&store, image_name) {
            Ok(outcome) => {
                summary.succeeded += 1;
                emit(format!(
                    "{} {} -> {} ({} bytes)",
                    "✓".green(),
                    image_name,
                    outcome.chunk,
                    outcome.chunk_len
                ));
                summary.items.push(ItemReport {
                    source: image_name.clone(),
                    output: Some(outcome.chunk.as_str().to_string()),
                    error: None,
                });

                if remove_source {
                    // Two-phase contract: the image goes away only after
                    // its chunk is fully written
                    store.remove_blob(image_name)?;
                }
            }
            Err(err) => {
                // Unreadable or damaged items are surfaced and the batch
                // moves on
                summary.failed += 1;
                error!("Image {} failed: {}", image_name, err);
                emit(format!("{} {}: {}", "✗".red(), image_name, err));
                summary.items.push(ItemReport {
                    source: image_name.clone(),
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
