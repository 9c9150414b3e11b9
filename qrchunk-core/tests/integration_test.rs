//! Integration tests for the complete chunk → image → chunk flow

use bytes::Bytes;
use qrchunk_core::constants::MAX_CHUNK_SIZE;
use qrchunk_core::pipeline::{decode_image, encode_chunk};
use qrchunk_core::storage::{BlobStore, MemoryStore};
use qrchunk_core::{ChunkName, CodecError};

/// Encode a chunk, decode the produced image, return the recovered bytes
fn round_trip(data: &[u8]) -> Bytes {
    let store = MemoryStore::new();
    store.insert("42", Bytes::copy_from_slice(data));

    let name = ChunkName::parse("42").unwrap();
    let encoded = encode_chunk(&store, &name).unwrap();
    assert_eq!(encoded.image_name, "42.png");

    // Drop the source so the decoded bytes can only come from the image
    let image = store.read_blob("42.png").unwrap();
    let decode_store = MemoryStore::new();
    decode_store.insert("42.png", image);

    let decoded = decode_image(&decode_store, "42.png").unwrap();
    assert_eq!(decoded.chunk, name);

    decode_store.read_blob("42").unwrap()
}

#[test]
fn test_round_trip_text_chunk() {
    let data = b"Some chunk content that came from a real file.";
    assert_eq!(round_trip(data).as_ref(), data);
}

#[test]
fn test_round_trip_empty_chunk() {
    assert_eq!(round_trip(b"").len(), 0);
}

#[test]
fn test_round_trip_all_byte_values() {
    let data: Vec<u8> = (0..=255u8).collect();
    assert_eq!(round_trip(&data).as_ref(), &data[..]);
}

#[test]
fn test_round_trip_zero_runs() {
    // Exercises the all-zero group shorthand through the full pipeline
    let mut data = vec![0u8; 64];
    data.extend_from_slice(b"mid");
    data.extend_from_slice(&[0u8; 33]);
    assert_eq!(round_trip(&data).as_ref(), &data[..]);
}

#[test]
fn test_round_trip_chunk_at_capacity() {
    let data = vec![0x01u8; MAX_CHUNK_SIZE];
    assert_eq!(round_trip(&data).as_ref(), &data[..]);
}

#[test]
fn test_oversized_chunk_fails_encode() {
    let store = MemoryStore::new();
    store.insert("big", vec![0x01u8; MAX_CHUNK_SIZE + 1]);

    let name = ChunkName::parse("big").unwrap();
    assert!(matches!(
        encode_chunk(&store, &name),
        Err(CodecError::PayloadTooLarge(_, _))
    ));

    // The failed pipeline must not have produced an image
    assert!(!store.contains("big.png"));
}

#[test]
fn test_decode_image_without_symbol() {
    // A valid PNG that contains no symbol at all
    let blank = image::GrayImage::from_pixel(200, 200, image::Luma([255u8]));
    let mut png = std::io::Cursor::new(Vec::new());
    blank.write_to(&mut png, image::ImageFormat::Png).unwrap();

    let store = MemoryStore::new();
    store.insert("13.png", png.into_inner());

    assert!(matches!(
        decode_image(&store, "13.png"),
        Err(CodecError::NoSymbolFound)
    ));
    assert!(!store.contains("13"));
}

#[test]
fn test_decode_unreadable_image_bytes() {
    let store = MemoryStore::new();
    store.insert("13.png", b"this is not a png".as_slice());

    assert!(matches!(
        decode_image(&store, "13.png"),
        Err(CodecError::Image(_))
    ));
}

#[test]
fn test_idempotent_naming() {
    // Chunk "42" becomes "42.png" and decodes back under "42"
    let store = MemoryStore::new();
    store.insert("42", b"identified by name".as_slice());

    let name = ChunkName::parse("42").unwrap();
    encode_chunk(&store, &name).unwrap();
    let outcome = decode_image(&store, "42.png").unwrap();

    assert_eq!(outcome.chunk.as_str(), "42");
    assert_eq!(
        store.read_blob("42").unwrap().as_ref(),
        b"identified by name"
    );
}

#[test]
fn test_failure_leaves_source_untouched() {
    let store = MemoryStore::new();
    let original = vec![0x01u8; MAX_CHUNK_SIZE + 1];
    store.insert("big", original.clone());

    let name = ChunkName::parse("big").unwrap();
    let _ = encode_chunk(&store, &name);

    assert_eq!(store.read_blob("big").unwrap().as_ref(), &original[..]);
}
