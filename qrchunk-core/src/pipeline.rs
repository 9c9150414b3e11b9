//! The two one-way conversion pipelines
//!
//! Encode: read chunk bytes → text-safe payload → rendered symbol →
//! stored image. Decode: stored image → symbol payload → chunk bytes →
//! stored chunk. Each invocation handles exactly one item and aborts on
//! the first failure without touching its source blob; batch sequencing,
//! retries and source cleanup belong to the caller.

use crate::constants::DEFAULT_MODULE_PIXELS;
use crate::error::CodecError;
use crate::storage::BlobStore;
use crate::types::ChunkName;
use crate::{symbol, textsafe};
use image::GrayImage;
use serde::Serialize;
use std::io::Cursor;

#[cfg(feature = "logging")]
use tracing::debug;

/// Result of one encode pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct EncodeOutcome {
    /// Source chunk name
    pub chunk: ChunkName,

    /// Name the symbol image was stored under
    pub image_name: String,

    /// Size of the source chunk in bytes
    pub chunk_len: usize,

    /// Length of the text-safe payload in characters
    pub payload_len: usize,
}

/// Result of one decode pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct DecodeOutcome {
    /// Recovered chunk name
    pub chunk: ChunkName,

    /// Length of the symbol payload in characters
    pub payload_len: usize,

    /// Size of the chunk written back, in bytes
    pub chunk_len: usize,
}

/// Convert one named chunk into a stored symbol image
pub fn encode_chunk<S: BlobStore>(
    store: &S,
    name: &ChunkName,
) -> Result<EncodeOutcome, CodecError> {
    encode_chunk_scaled(store, name, DEFAULT_MODULE_PIXELS)
}

/// Encode pipeline with an explicit module pixel size.
///
/// Reads the chunk bytes, encodes them as printable text, renders the
/// symbol and persists the image under [`ChunkName::image_name`]. The
/// source blob is never modified.
pub fn encode_chunk_scaled<S: BlobStore>(
    store: &S,
    name: &ChunkName,
    module_pixels: u32,
) -> Result<EncodeOutcome, CodecError> {
    let data = store.read_blob(name.as_str())?;
    let payload = textsafe::encode(&data);
    let image = symbol::render_scaled(&payload, module_pixels)?;

    let image_name = name.image_name();
    store.write_blob(&image_name, &image_to_png(&image)?)?;

    #[cfg(feature = "logging")]
    debug!(
        "Encoded chunk {} ({} bytes) into {}",
        name,
        data.len(),
        image_name
    );

    Ok(EncodeOutcome {
        chunk: name.clone(),
        image_name,
        chunk_len: data.len(),
        payload_len: payload.len(),
    })
}

/// Convert one stored symbol image back into its chunk.
///
/// The chunk name is derived from the image name by stripping the image
/// extension; the recovered bytes are persisted under that bare name.
pub fn decode_image<S: BlobStore>(
    store: &S,
    image_name: &str,
) -> Result<DecodeOutcome, CodecError> {
    let name = ChunkName::from_image_name(image_name)?;

    let raw = store.read_blob(image_name)?;
    let image = image::load_from_memory(&raw)?.to_luma8();
    let payload = symbol::read(&image)?;
    let data = textsafe::decode(&payload)?;

    store.write_blob(name.as_str(), &data)?;

    #[cfg(feature = "logging")]
    debug!(
        "Decoded {} into chunk {} ({} bytes)",
        image_name,
        name,
        data.len()
    );

    Ok(DecodeOutcome {
        chunk: name,
        payload_len: payload.len(),
        chunk_len: data.len(),
    })
}

/// Encode a grayscale image as PNG bytes
fn image_to_png(image: &GrayImage) -> Result<Vec<u8>, CodecError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, image::ImageFormat::Png)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_encode_writes_image_blob() {
        let store = MemoryStore::new();
        store.insert("7", b"chunk seven".as_slice());

        let name = ChunkName::parse("7").unwrap();
        let outcome = encode_chunk(&store, &name).unwrap();

        assert_eq!(outcome.image_name, "7.png");
        assert_eq!(outcome.chunk_len, 11);
        assert!(store.contains("7.png"));
    }

    #[test]
    fn test_decode_recovers_chunk() {
        let store = MemoryStore::new();
        store.insert("7", b"chunk seven".as_slice());

        let name = ChunkName::parse("7").unwrap();
        encode_chunk(&store, &name).unwrap();
        let outcome = decode_image(&store, "7.png").unwrap();

        assert_eq!(outcome.chunk, name);
        assert_eq!(store.read_blob("7").unwrap().as_ref(), b"chunk seven");
    }

    #[test]
    fn test_encode_missing_chunk() {
        let store = MemoryStore::new();
        let name = ChunkName::parse("absent").unwrap();

        assert!(matches!(
            encode_chunk(&store, &name),
            Err(CodecError::BlobNotFound(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unnamed_image() {
        let store = MemoryStore::new();
        assert!(matches!(
            decode_image(&store, "not-an-image.txt"),
            Err(CodecError::InvalidName(_))
        ));
    }
}
