//! Basic chunk round-trip example

use qrchunk_core::pipeline::{decode_image, encode_chunk};
use qrchunk_core::storage::{BlobStore, MemoryStore};
use qrchunk_core::ChunkName;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Qrchunk Basic Round-Trip Example\n");

    let store = MemoryStore::new();

    // Seed a few chunks of varying content
    store.insert("1", b"first chunk".as_slice());
    store.insert("2", (0u8..=255).collect::<Vec<u8>>());
    store.insert("3", vec![0u8; 128]);

    // Encode every chunk into a symbol image
    for name in ["1", "2", "3"] {
        let outcome = encode_chunk(&store, &ChunkName::parse(name)?)?;
        println!(
            "Chunk {}: {} bytes -> {} payload characters -> {}",
            outcome.chunk, outcome.chunk_len, outcome.payload_len, outcome.image_name
        );
    }

    // Read every image back and verify the bytes survived
    for name in ["1", "2", "3"] {
        let original = store.read_blob(name)?;
        store.write_blob(name, b"overwritten")?;

        let outcome = decode_image(&store, &format!("{}.png", name))?;
        let recovered = store.read_blob(name)?;

        assert_eq!(original, recovered);
        println!("Image {}.png -> chunk {} ({} bytes, intact)", name, outcome.chunk, outcome.chunk_len);
    }

    println!("\nAll chunks survived the image round trip");

    Ok(())
}
