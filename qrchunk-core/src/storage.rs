//! Blob storage abstraction backing the pipelines

use crate::error::CodecError;
use bytes::Bytes;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Byte-addressable named storage, the collaborator both pipelines read
/// from and write to.
///
/// File-system-backed in the reference use case, but any keyed blob
/// store works. Methods take `&self` so one store can serve as both
/// source and destination of a batch run; serializing access across
/// items is the batch orchestrator's job, not the store's.
pub trait BlobStore {
    /// Read the blob stored under `name`.
    ///
    /// A missing name fails with [`CodecError::BlobNotFound`].
    fn read_blob(&self, name: &str) -> Result<Bytes, CodecError>;

    /// Write `data` under `name`, replacing any previous blob
    fn write_blob(&self, name: &str, data: &[u8]) -> Result<(), CodecError>;

    /// Enumerate blob names in a deterministic order
    fn list_blobs(&self) -> Result<Vec<String>, CodecError>;
}

/// In-memory store used by tests and examples
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<BTreeMap<String, Bytes>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a blob directly
    pub fn insert(&self, name: &str, data: impl Into<Bytes>) {
        self.blobs.borrow_mut().insert(name.to_string(), data.into());
    }

    /// Whether a blob with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.blobs.borrow().contains_key(name)
    }
}

impl BlobStore for MemoryStore {
    fn read_blob(&self, name: &str) -> Result<Bytes, CodecError> {
        self.blobs
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| CodecError::BlobNotFound(name.to_string()))
    }

    fn write_blob(&self, name: &str, data: &[u8]) -> Result<(), CodecError> {
        self.blobs
            .borrow_mut()
            .insert(name.to_string(), Bytes::copy_from_slice(data));
        Ok(())
    }

    fn list_blobs(&self) -> Result<Vec<String>, CodecError> {
        Ok(self.blobs.borrow().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.write_blob("42", b"some bytes").unwrap();

        assert_eq!(store.read_blob("42").unwrap(), Bytes::from_static(b"some bytes"));
        assert_eq!(store.list_blobs().unwrap(), vec!["42".to_string()]);
    }

    #[test]
    fn test_missing_blob() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.read_blob("absent"),
            Err(CodecError::BlobNotFound(_))
        ));
    }

    #[test]
    fn test_list_is_sorted() {
        let store = MemoryStore::new();
        store.insert("9", b"".as_slice());
        store.insert("10", b"".as_slice());
        store.insert("1", b"".as_slice());

        assert_eq!(store.list_blobs().unwrap(), vec!["1", "10", "9"]);
    }
}
