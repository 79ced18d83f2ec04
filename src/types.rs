//! Core types used throughout the project.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::input::translation::{
    LoadError,
    flatten_json,
};

/// An opaque language identifier such as `"en"` or `"pt-BR"`.
///
/// No validation is performed at this layer.
pub type LanguageCode = String;

/// An opaque identifier of a single message.
pub type TranslationKey = String;

/// Messages of one language: translation key -> display text.
pub type Messages = HashMap<TranslationKey, String>;

/// Storage key used for the active language when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "pol.language";

/// Last language tried by the fallback chain, regardless of the configured default.
pub const FINAL_FALLBACK_LANGUAGE: &str = "en";

/// Translation table: language code -> translation key -> display text.
///
/// Built once (from code or from files) and then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TranslationTable {
    /// Messages grouped by language.
    languages: HashMap<LanguageCode, Messages>,
}

impl TranslationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { languages: HashMap::new() }
    }

    /// Adds (or replaces) the messages of a language.
    ///
    /// Returns `self` so tables can be built in a single expression.
    #[must_use]
    pub fn with_language(mut self, code: impl Into<LanguageCode>, messages: Messages) -> Self {
        self.languages.insert(code.into(), messages);
        self
    }

    /// Merges `messages` into the entry of `code`, creating it if needed.
    ///
    /// Keys already present are overwritten.
    pub fn merge_language(&mut self, code: impl Into<LanguageCode>, messages: Messages) {
        let code = code.into();
        let entry = self.languages.entry(code.clone()).or_default();
        for (key, text) in messages {
            if let Some(previous) = entry.insert(key.clone(), text) {
                tracing::debug!(language = %code, %key, %previous, "Overriding translation");
            }
        }
    }

    /// Returns the messages of a language, if the table has it.
    #[must_use]
    pub fn messages(&self, code: &str) -> Option<&Messages> {
        self.languages.get(code)
    }

    /// Returns the stored language code together with its messages.
    #[must_use]
    pub fn entry(&self, code: &str) -> Option<(&str, &Messages)> {
        self.languages.get_key_value(code).map(|(code, messages)| (code.as_str(), messages))
    }

    /// Whether the table has an entry for `code`.
    #[must_use]
    pub fn contains_language(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// Language codes present in the table, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether the table has no languages at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Builds a table from a JSON object whose top-level keys are language codes.
    ///
    /// Each language value is flattened with `separator`, so
    /// `{"en": {"menu": {"open": "Open"}}}` yields the key `menu.open` for `en`.
    ///
    /// # Errors
    /// - [`LoadError::NotAnObject`] if the root or a language entry is not a JSON object
    pub fn from_json(json: &Value, separator: &str) -> Result<Self, LoadError> {
        let Value::Object(map) = json else {
            return Err(LoadError::NotAnObject("<root>".to_string()));
        };

        let mut table = Self::new();
        for (code, messages) in map {
            if !messages.is_object() {
                return Err(LoadError::NotAnObject(code.clone()));
            }
            table.merge_language(code.clone(), flatten_json(messages, separator, None));
        }
        Ok(table)
    }
}

impl FromIterator<(LanguageCode, Messages)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (LanguageCode, Messages)>>(iter: I) -> Self {
        Self { languages: iter.into_iter().collect() }
    }
}
