//! # Qrchunk Core
//!
//! Converts named binary chunks into scannable symbol images and back,
//! guaranteeing a byte-exact round trip.
//!
//! ## Modules
//!
//! - `constants`: codec alphabet and symbol capacity limits
//! - `types`: core types (Chunk, ChunkName)
//! - `textsafe`: reversible binary-to-text codec
//! - `symbol`: symbol rendering and recognition wrappers
//! - `storage`: blob storage abstraction the pipelines run against
//! - `pipeline`: the one-way encode and decode pipelines

#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod pipeline;
pub mod storage;
pub mod symbol;
pub mod textsafe;
pub mod types;

// Re-export commonly used types
pub use error::CodecError;
pub use storage::{BlobStore, MemoryStore};
pub use types::{Chunk, ChunkName};

/// Result type alias for qrchunk operations
pub type Result<T> = std::result::Result<T, CodecError>;
