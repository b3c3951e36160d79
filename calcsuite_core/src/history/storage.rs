//! # Storage Capability
//!
//! The history store does not talk to the filesystem directly; it goes
//! through the [`Storage`] trait, a small string key-value capability that
//! is injected at construction. That keeps the store testable with an
//! in-memory fake and leaves the choice of medium to the front end.
//!
//! Two implementations ship with the crate:
//!
//! - [`FileStorage`] - one JSON file per key in a directory, written
//!   atomically (temp file + rename) so an interrupted write never leaves
//!   a half-written log behind.
//! - [`MemoryStorage`] - a HashMap, for tests and ephemeral sessions.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{CalcError, CalcResult};

/// String key-value persistence capability.
///
/// Keys are the per-calculator history keys (e.g. `bmiHistory`); values are
/// JSON documents. Implementations are free to map keys to files, rows, or
/// anything else.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> CalcResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> CalcResult<()>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&mut self, key: &str) -> CalcResult<()>;
}

/// In-memory storage backed by a HashMap.
///
/// Nothing survives the process; useful for tests and for running the
/// calculators without touching disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    map: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Number of keys currently stored (test convenience)
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no keys are stored
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> CalcResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> CalcResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CalcResult<()> {
        self.map.remove(key);
        Ok(())
    }
}

/// File-backed storage: each key becomes `<dir>/<key>.json`.
///
/// Writes go through a temp file and an atomic rename, so a crash mid-write
/// leaves either the old log or the new one, never a torn file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir`. The directory is created
    /// lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Directory this storage writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> CalcResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| CalcError::storage_error("read", key, e.to_string()))
    }

    fn write(&mut self, key: &str, value: &str) -> CalcResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| CalcError::storage_error("create dir", key, e.to_string()))?;

        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!("{}.json.tmp", key));

        let mut tmp_file = File::create(&tmp_path)
            .map_err(|e| CalcError::storage_error("create temp file", key, e.to_string()))?;

        tmp_file
            .write_all(value.as_bytes())
            .map_err(|e| CalcError::storage_error("write temp file", key, e.to_string()))?;

        tmp_file
            .sync_all()
            .map_err(|e| CalcError::storage_error("sync temp file", key, e.to_string()))?;

        fs::rename(&tmp_path, &path).map_err(|e| {
            // Clean up temp file if rename fails
            let _ = fs::remove_file(&tmp_path);
            CalcError::storage_error("rename to final", key, e.to_string())
        })?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> CalcResult<()> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path)
            .map_err(|e| CalcError::storage_error("remove", key, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_storage(name: &str) -> FileStorage {
        FileStorage::new(temp_dir().join(format!("calcsuite_test_{}", name)))
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read("k").unwrap(), None);

        storage.write("k", "[1,2,3]").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("[1,2,3]"));

        storage.remove("k").unwrap();
        assert_eq!(storage.read("k").unwrap(), None);

        // Removing an absent key is fine
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let mut storage = temp_storage("roundtrip");

        storage.write("bmiHistory", "[]").unwrap();
        assert_eq!(storage.read("bmiHistory").unwrap().as_deref(), Some("[]"));

        storage.remove("bmiHistory").unwrap();
        assert_eq!(storage.read("bmiHistory").unwrap(), None);

        let _ = fs::remove_dir_all(storage.dir());
    }

    #[test]
    fn test_file_storage_missing_key_reads_none() {
        let storage = temp_storage("missing");
        assert_eq!(storage.read("loanHistory").unwrap(), None);
    }

    #[test]
    fn test_atomic_write_leaves_no_tmp_file() {
        let mut storage = temp_storage("atomic");

        storage.write("currencyHistory", "[{}]").unwrap();

        let tmp = storage.dir().join("currencyHistory.json.tmp");
        assert!(!tmp.exists());
        assert!(storage.dir().join("currencyHistory.json").exists());

        let _ = fs::remove_dir_all(storage.dir());
    }
}
