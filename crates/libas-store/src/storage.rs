//! # Durable Storage Substrate
//!
//! A string key/value persistence substrate, scoped per browsing context.
//! The store uses three logical keys: the serialized cart collection, the
//! serialized wishlist collection, and the currency code.
//!
//! ## Access Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storage Lifecycle                                   │
//! │                                                                         │
//! │  Session start ────► get("cart"), get("wishlist"), get("currency")     │
//! │                      (once; corrupt/missing values fall back to        │
//! │                       defaults, logged, never fatal)                    │
//! │                                                                         │
//! │  Every mutation ───► set("cart"), set("wishlist"), set("currency")     │
//! │                      (full-state mirror; a failed write is logged and   │
//! │                       retried only by the next mutation's mirror)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Write volume is bounded by human interaction speed, so there is no
//! debouncing or coalescing.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (disk full, quota exceeded, permissions).
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Key would escape the storage scope (path separators, empty).
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// No per-user application data directory could be resolved.
    #[error("could not resolve application data directory")]
    NoDataDir,
}

/// A string key/value persistence substrate.
///
/// Implementations must tolerate repeated full-state writes; values are
/// opaque text payloads owned by the store.
pub trait StorageBackend: Send {
    /// Reads the value for `key`, or `None` when never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// File Storage
// =============================================================================

/// File-backed storage: one file per key under a directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStorage { dir })
    }

    /// Creates storage under the per-user application data directory.
    pub fn in_app_data() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("pk", "libas", "libas")
            .ok_or(StorageError::NoDataDir)?;
        Self::new(dirs.data_dir())
    }

    /// Returns the storage root.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys are fixed short identifiers; anything path-like is a bug
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory storage over a shared map.
///
/// Clones share the same underlying map, which makes this the natural
/// substrate for ephemeral sessions and for reload simulations in tests:
/// hand one clone to a store, keep another, and re-open from it later.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty memory store.
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
