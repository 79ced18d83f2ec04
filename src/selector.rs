//! Bridge between the active language and its persisted value.

use crate::storage::{
    LanguageStorage,
    StorageError,
};
use crate::store::TranslationStore;
use crate::types::LanguageCode;

/// Reads and writes the active language through a [`LanguageStorage`].
///
/// The selector holds no copy of the language: every [`get`](Self::get) goes
/// to the storage, so writes made by other consumers sharing the storage and
/// key are observed immediately.
#[derive(Debug, Clone)]
pub struct LanguageSelector<S> {
    /// Persistence backend
    storage: S,
    /// Key of the active language in the storage
    storage_key: String,
    /// Returned when nothing is persisted
    default_language: LanguageCode,
}

impl<S: LanguageStorage> LanguageSelector<S> {
    /// Creates a selector for an explicit key and default.
    #[must_use]
    pub fn new(
        storage: S,
        storage_key: impl Into<String>,
        default_language: impl Into<LanguageCode>,
    ) -> Self {
        Self { storage, storage_key: storage_key.into(), default_language: default_language.into() }
    }

    /// Creates a selector using the storage key and default language of `store`.
    #[must_use]
    pub fn for_store(storage: S, store: &TranslationStore) -> Self {
        Self::new(storage, store.storage_key(), store.default_language_code())
    }

    /// Returns the persisted language, or the default if none was ever persisted.
    ///
    /// A storage failure is logged and treated as "nothing persisted".
    #[must_use]
    pub fn get(&self) -> LanguageCode {
        match self.storage.read(&self.storage_key) {
            Ok(Some(code)) => code,
            Ok(None) => self.default_language.clone(),
            Err(e) => {
                tracing::warn!(
                    storage_key = %self.storage_key,
                    "Failed to read the active language, using \"{}\": {e}",
                    self.default_language
                );
                self.default_language.clone()
            }
        }
    }

    /// Persists `code` as the active language.
    ///
    /// # Errors
    /// Propagates the storage failure; the previous value stays in effect.
    pub fn set(&self, code: &str) -> Result<(), StorageError> {
        tracing::debug!(storage_key = %self.storage_key, code, "Changing language");
        self.storage.write(&self.storage_key, code)
    }

    /// Key of the active language in the storage.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Language returned when nothing is persisted.
    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::storage::MemoryStorage;

    /// Storage whose every operation fails.
    #[derive(Debug)]
    struct BrokenStorage;

    impl LanguageStorage for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Poisoned)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[googletest::test]
    fn get_returns_default_on_first_run() {
        let storage = MemoryStorage::new();
        let selector = LanguageSelector::new(&storage, "pol.language", "en");

        expect_that!(selector.get(), eq("en"));
        // Reading never persists the default
        let persisted = storage.read("pol.language").unwrap();
        expect_that!(persisted.as_deref(), none());
    }

    #[googletest::test]
    fn set_is_observed_by_other_selectors() {
        let storage = MemoryStorage::new();
        let first = LanguageSelector::new(storage.clone(), "pol.language", "en");
        let second = LanguageSelector::new(storage, "pol.language", "en");

        first.set("es").unwrap();

        expect_that!(first.get(), eq("es"));
        expect_that!(second.get(), eq("es"));
    }

    #[googletest::test]
    fn selectors_with_different_keys_are_independent() {
        let storage = MemoryStorage::new();
        let app = LanguageSelector::new(&storage, "app.language", "en");
        let docs = LanguageSelector::new(&storage, "docs.language", "de");

        app.set("fr").unwrap();

        expect_that!(app.get(), eq("fr"));
        expect_that!(docs.get(), eq("de"));
    }

    #[rstest]
    fn broken_storage_degrades_to_default() {
        let selector = LanguageSelector::new(BrokenStorage, "pol.language", "en");

        assert_eq!(selector.get(), "en");
        assert!(matches!(selector.set("es"), Err(StorageError::Poisoned)));
    }

    #[googletest::test]
    fn for_store_uses_store_settings() {
        let store = TranslationStore::new("de", crate::types::TranslationTable::new())
            .with_storage_key("custom.key");

        let selector = LanguageSelector::for_store(MemoryStorage::new(), &store);

        expect_that!(selector.storage_key(), eq("custom.key"));
        expect_that!(selector.default_language(), eq("de"));
    }
}
