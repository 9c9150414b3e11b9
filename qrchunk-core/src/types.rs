//! Core types for chunks and their names

use crate::constants::IMAGE_EXTENSION;
use crate::error::CodecError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Validated name of a chunk.
///
/// Chunk source names are bare identifier/number strings with no
/// extension: non-empty ASCII alphanumerics, `_` or `-`. The produced
/// image is keyed by [`ChunkName::image_name`]; decoding recovers the
/// name with [`ChunkName::from_image_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkName(String);

impl ChunkName {
    /// Parse and validate a chunk name
    pub fn parse(name: &str) -> Result<Self, CodecError> {
        if name.is_empty() {
            return Err(CodecError::InvalidName(name.to_string()));
        }
        let valid = name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if !valid {
            return Err(CodecError::InvalidName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Recover a chunk name from the name of its symbol image.
    ///
    /// Exact inverse of [`ChunkName::image_name`]: strips the image
    /// extension and re-validates the remainder.
    pub fn from_image_name(image_name: &str) -> Result<Self, CodecError> {
        let stem = image_name
            .strip_suffix(IMAGE_EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .ok_or_else(|| CodecError::InvalidName(image_name.to_string()))?;
        Self::parse(stem)
    }

    /// Name under which this chunk's symbol image is stored
    pub fn image_name(&self) -> String {
        format!("{}.{}", self.0, IMAGE_EXTENSION)
    }

    /// The bare name string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChunkName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named unit of binary data moving through the codec.
///
/// Read once from storage at encode time, written once at decode time;
/// never kept beyond a single pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Validated source name
    pub name: ChunkName,

    /// Raw chunk bytes
    pub data: Bytes,
}

impl Chunk {
    /// Create a chunk from a name and its bytes
    pub fn new(name: ChunkName, data: Bytes) -> Self {
        Self { name, data }
    }
}
