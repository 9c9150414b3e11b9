//! Error types for qrchunk operations

/// Errors that can occur while moving a chunk through the symbol codec
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Encoded payload exceeds the largest supported symbol capacity
    #[error("Payload of {0} characters exceeds symbol capacity {1}")]
    PayloadTooLarge(usize, usize),

    /// No readable symbol was found in the image
    #[error("No readable symbol found in image")]
    NoSymbolFound,

    /// A symbol pattern was detected but failed its internal error correction
    #[error("Symbol detected but failed error correction: {0}")]
    ChecksumMismatch(String),

    /// Text is not a valid text-safe encoding
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Chunk name violates the naming convention
    #[error("Invalid chunk name: {0:?}")]
    InvalidName(String),

    /// Blob missing from the store
    #[error("No blob named {0:?} in store")]
    BlobNotFound(String),

    /// IO error during read/write
    #[error("IO error: {0}")]
    Io(String),

    /// Raster data could not be loaded or written as an image
    #[error("Image error: {0}")]
    Image(String),
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}

impl From<image::ImageError> for CodecError {
    fn from(err: image::ImageError) -> Self {
        CodecError::Image(err.to_string())
    }
}
