//! Filesystem-backed blob store rooted at one batch directory

use bytes::Bytes;
use qrchunk_core::storage::BlobStore;
use qrchunk_core::CodecError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Blob store over the plain files of a single directory.
///
/// Blob names are bare file names inside the root. Enumeration skips
/// subdirectories and returns names sorted, so batch order is
/// deterministic.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Create a store rooted at `root`. The directory must exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file backing a blob
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Remove a blob.
    ///
    /// Not part of [`BlobStore`]: removal is the batch orchestrator's
    /// delete-on-success policy, never the pipelines'.
    pub fn remove_blob(&self, name: &str) -> Result<(), CodecError> {
        fs::remove_file(self.path_of(name)).map_err(Into::into)
    }
}

impl BlobStore for FsBlobStore {
    fn read_blob(&self, name: &str) -> Result<Bytes, CodecError> {
        match fs::read(self.path_of(name)) {
            Ok(data) => Ok(Bytes::from(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(CodecError::BlobNotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write_blob(&self, name: &str, data: &[u8]) -> Result<(), CodecError> {
        fs::write(self.path_of(name), data).map_err(Into::into)
    }

    fn list_blobs(&self) -> Result<Vec<String>, CodecError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Ok(name) = entry.file_name().into_string() {
                    names.push(name);
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
