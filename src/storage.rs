//! Persistence of the active language.
//!
//! [`LanguageStorage`] is a string-keyed, string-valued store with synchronous
//! get/set semantics. Receivers are `&self`: implementations use interior
//! mutability so one storage can be shared by several consumers, and a write
//! made through one handle is observed by every other handle.

mod file;
mod memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors raised by a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error when the backing file cannot be read or written
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Error when the backing file holds invalid data
    #[error("Storage data is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
    /// A writer panicked while holding the lock
    #[error("Storage lock is poisoned")]
    Poisoned,
}

/// Key-value persistence for string values.
pub trait LanguageStorage {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has ever been written.
    ///
    /// # Errors
    /// Backend-specific failures.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Backend-specific failures.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: LanguageStorage + ?Sized> LanguageStorage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<S: LanguageStorage + ?Sized> LanguageStorage for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
