//! The immutable record a translator is initialized with.

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};

use crate::config::I18nSettings;
use crate::input::translation::{
    LoadError,
    load_table_file,
    load_translation_dir,
};
use crate::types::{
    DEFAULT_STORAGE_KEY,
    LanguageCode,
    TranslationTable,
};

/// Default language, translation table and storage key of one application session.
///
/// Nothing mutates a store after construction; translators borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationStore {
    /// Key under which the active language is persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage_key: Option<String>,
    /// Language used when nothing is persisted, and as the fallback language
    default_language_code: LanguageCode,
    /// All translations
    translation_table: TranslationTable,
}

impl TranslationStore {
    /// Creates a store using [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(default_language_code: impl Into<LanguageCode>, table: TranslationTable) -> Self {
        Self {
            storage_key: None,
            default_language_code: default_language_code.into(),
            translation_table: table,
        }
    }

    /// Overrides the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = Some(storage_key.into());
        self
    }

    /// Builds a store from workspace settings, loading the translation files they describe.
    ///
    /// Relative paths in the settings are resolved against `workspace_root`.
    ///
    /// # Errors
    /// Any [`LoadError`] raised while reading the translation files.
    pub fn from_settings(settings: &I18nSettings, workspace_root: &Path) -> Result<Self, LoadError> {
        let files = &settings.translation_files;
        let table = match &files.table_file {
            Some(table_file) => {
                load_table_file(&workspace_root.join(table_file), &settings.key_separator)?
            }
            None => load_translation_dir(
                workspace_root,
                &files.file_pattern,
                &settings.exclude_patterns,
                &settings.key_separator,
            )?,
        };
        tracing::debug!(languages = ?table.languages(), "Translation table loaded");

        Ok(Self::new(settings.default_language.clone(), table)
            .with_storage_key(settings.storage_key.clone()))
    }

    /// Key under which the active language is persisted.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    /// The configured default language.
    #[must_use]
    pub fn default_language_code(&self) -> &str {
        &self.default_language_code
    }

    /// The translation table.
    #[must_use]
    pub const fn translation_table(&self) -> &TranslationTable {
        &self.translation_table
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::TranslationFilesConfig;
    use crate::test_utils::create_table;

    #[googletest::test]
    fn storage_key_defaults_to_pol_language() {
        let store = TranslationStore::new("en", TranslationTable::new());

        expect_that!(store.storage_key(), eq("pol.language"));
        expect_that!(store.with_storage_key("app.lang").storage_key(), eq("app.lang"));
    }

    #[googletest::test]
    fn deserialize_without_storage_key() {
        let store: TranslationStore = serde_json::from_str(
            r#"{"defaultLanguageCode": "es", "translationTable": {"es": {"greeting": "Hola"}}}"#,
        )
        .unwrap();

        expect_that!(store.storage_key(), eq(DEFAULT_STORAGE_KEY));
        expect_that!(store.default_language_code(), eq("es"));
        expect_that!(store.translation_table(), eq(&create_table(&[("es", &[("greeting", "Hola")])])));
    }

    #[rstest]
    fn from_settings_loads_translation_dir() {
        let temp_dir = TempDir::new().unwrap();
        let locales = temp_dir.path().join("locales");
        fs::create_dir_all(&locales).unwrap();
        fs::write(locales.join("en.json"), r#"{"greeting": "Hello"}"#).unwrap();
        fs::write(locales.join("es.json"), r#"{"greeting": "Hola"}"#).unwrap();
        let settings = I18nSettings { default_language: "es".to_string(), ..Default::default() };

        let store = TranslationStore::from_settings(&settings, temp_dir.path()).unwrap();

        assert_eq!(store.translation_table().languages(), vec!["en", "es"]);
        assert_eq!(store.default_language_code(), "es");
        assert_eq!(store.storage_key(), "pol.language");
    }

    #[rstest]
    fn from_settings_prefers_table_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("translations.json"),
            r#"{"en": {"greeting": "Hello"}, "de": {"greeting": "Hallo"}}"#,
        )
        .unwrap();
        let settings = I18nSettings {
            storage_key: "app.language".to_string(),
            translation_files: TranslationFilesConfig {
                table_file: Some("translations.json".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let store = TranslationStore::from_settings(&settings, temp_dir.path()).unwrap();

        assert_eq!(store.translation_table().languages(), vec!["de", "en"]);
        assert_eq!(store.storage_key(), "app.language");
    }
}
