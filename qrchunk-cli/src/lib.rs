//! Library entry for qrchunk-cli used by integration tests and embedding.

pub mod commands;
pub mod store;

pub use store::FsBlobStore;

use serde::Serialize;

/// Per-item result of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    /// Blob the item started from (chunk name or image name)
    pub source: String,

    /// Blob written on success
    pub output: Option<String>,

    /// Failure message when the item failed
    pub error: Option<String>,
}

/// Counts and per-item outcomes for a completed batch.
///
/// A failed item never aborts the batch; it is counted here, logged and
/// carried in `items` so no failure goes unobserved.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    /// Items the batch attempted
    pub processed: usize,

    /// Items converted successfully
    pub succeeded: usize,

    /// Items that failed and were left in place
    pub failed: usize,

    /// Directory entries that did not match the naming convention
    pub skipped: usize,

    /// Per-item reports in processing order
    pub items: Vec<ItemReport>,
}
