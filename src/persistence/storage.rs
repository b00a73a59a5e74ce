//! Storage backends for the save blob

use std::io;
use std::path::PathBuf;

/// Default save file, relative to the working directory
pub const SAVE_FILE_NAME: &str = "savegame.bkt";

/// Somewhere a single save blob can be kept
pub trait SaveStorage {
    /// Read the stored blob, `Ok(None)` if nothing has been saved
    fn read(&self) -> io::Result<Option<Vec<u8>>>;
    /// Replace the stored blob
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// A save file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(SAVE_FILE_NAME)
    }
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SaveStorage for FileStorage {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        std::fs::write(&self.path, bytes)
    }
}

/// In-memory storage for tests and headless runs
///
/// Can be set to fail writes, to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    bytes: Option<Vec<u8>>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Some(bytes),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            bytes: None,
            fail_writes: true,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl SaveStorage for MemoryStorage {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.bytes.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "storage is read-only",
            ));
        }
        self.bytes = Some(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join(SAVE_FILE_NAME));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join(SAVE_FILE_NAME));
        storage.write(&[1, 2, 3, 4]).unwrap();
        assert_eq!(storage.read().unwrap(), Some(vec![1, 2, 3, 4]));

        storage.write(&[9]).unwrap();
        assert_eq!(storage.read().unwrap(), Some(vec![9]));
    }

    #[test]
    fn test_memory_storage_failing_writes() {
        let mut storage = MemoryStorage::failing();
        assert!(storage.write(&[1]).is_err());
        assert!(storage.read().unwrap().is_none());
    }
}
