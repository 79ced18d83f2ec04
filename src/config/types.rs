use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::DEFAULT_STORAGE_KEY;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Key under which the active language is persisted.
    pub storage_key: String,

    /// Used when no language has been persisted yet, and as the fallback language.
    pub default_language: String,

    pub translation_files: TranslationFilesConfig,
    pub exclude_patterns: Vec<String>,

    pub key_separator: String,

    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    /// Per-language files, matched relative to the workspace root.
    pub file_pattern: String,

    /// Single file holding every language (`{"en": {...}, "es": {...}}`).
    /// Takes precedence over `file_pattern` when set.
    pub table_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageConfig {
    /// JSON file holding the persisted language, relative to the workspace root.
    pub path: PathBuf,
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage_key.is_empty() {
            errors.push(ValidationError::new(
                "storageKey",
                format!("The storage key cannot be empty. Example: \"{DEFAULT_STORAGE_KEY}\""),
            ));
        }

        if self.default_language.is_empty() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                "The default language cannot be empty. Example: \"en\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/{locales,messages}/**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        if self.translation_files.table_file.as_ref().is_some_and(|f| f.as_os_str().is_empty()) {
            errors.push(ValidationError::new(
                "translationFiles.tableFile",
                "The table file cannot be empty. Please specify a path, or remove this field",
            ));
        }

        if self.storage.path.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "storage.path",
                "The storage path cannot be empty. Example: \".pol-i18n/storage.json\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_language: "en".to_string(),
            translation_files: TranslationFilesConfig::default(),
            exclude_patterns: vec!["node_modules/**".to_string()],
            key_separator: ".".to_string(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/{locales,messages}/**/*.json".to_string(), table_file: None }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(".pol-i18n/storage.json") }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = I18nSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"defaultLanguage": "es", "storageKey": "app.language"}"#;

        let settings: I18nSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.default_language, eq("es"));
        assert_that!(settings.storage_key, eq("app.language"));
        assert_that!(settings.key_separator, eq("."));
        assert_that!(settings.translation_files.table_file, none());
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: I18nSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.storage_key, eq("pol.language"));
        assert_that!(settings.default_language, eq("en"));
        assert_that!(settings.exclude_patterns, elements_are![eq("node_modules/**")]);
        assert_that!(
            settings.translation_files.file_pattern,
            eq("**/{locales,messages}/**/*.json")
        );
        assert_that!(settings.storage.path, eq(std::path::Path::new(".pol-i18n/storage.json")));
    }

    #[rstest]
    #[case::storage_key(
        I18nSettings { storage_key: String::new(), ..I18nSettings::default() },
        "storageKey"
    )]
    #[case::default_language(
        I18nSettings { default_language: String::new(), ..I18nSettings::default() },
        "defaultLanguage"
    )]
    #[case::key_separator(
        I18nSettings { key_separator: String::new(), ..I18nSettings::default() },
        "keySeparator"
    )]
    #[case::storage_path(
        I18nSettings { storage: StorageConfig { path: PathBuf::new() }, ..I18nSettings::default() },
        "storage.path"
    )]
    fn validate_empty_field(#[case] settings: I18nSettings, #[case] field_path: &str) {
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq(field_path)),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = I18nSettings {
            exclude_patterns: vec![
                "node_modules/**".to_string(),
                "dist/**".to_string(),
                "invalid[pattern".to_string(),
            ],
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("excludePatterns[2]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern")),
                field!(ValidationError.message, contains_substring("invalid[pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_translation_file_pattern_invalid_glob() {
        let settings = I18nSettings {
            translation_files: TranslationFilesConfig {
                file_pattern: "**/{locales,messages/*.json".to_string(),
                table_file: None,
            },
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.filePattern")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_empty_table_file() {
        let settings = I18nSettings {
            translation_files: TranslationFilesConfig {
                table_file: Some(PathBuf::new()),
                ..TranslationFilesConfig::default()
            },
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("translationFiles.tableFile"))])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = I18nSettings {
            storage_key: String::new(),
            key_separator: String::new(),
            ..I18nSettings::default()
        };

        let validation_result = settings.validate();
        let errors = validation_result.unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. storageKey"));
        assert_that!(error_message, contains_substring("2. keySeparator"));
        assert_that!(error_message, contains_substring("cannot be empty"));
    }
}
