//! In-process storage.

use std::collections::HashMap;
use std::sync::{
    Arc,
    Mutex,
};

use super::{
    LanguageStorage,
    StorageError,
};

/// Storage kept in memory for the lifetime of the process.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    /// Stored values
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguageStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn read_missing_key_returns_none() {
        let storage = MemoryStorage::new();

        let value = storage.read("pol.language").unwrap();
        expect_that!(value.as_deref(), none());
    }

    #[googletest::test]
    fn clones_share_values() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.write("pol.language", "es").unwrap();

        let value = other.read("pol.language").unwrap();
        expect_that!(value.as_deref(), some(eq("es")));
    }

    #[googletest::test]
    fn write_replaces_previous_value() {
        let storage = MemoryStorage::new();

        storage.write("pol.language", "es").unwrap();
        storage.write("pol.language", "fr").unwrap();

        let value = storage.read("pol.language").unwrap();
        expect_that!(value.as_deref(), some(eq("fr")));
    }
}
