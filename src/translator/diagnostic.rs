//! Non-fatal diagnostics raised while setting up a translator.

use std::fmt;

use crate::types::LanguageCode;

/// The active language is not in the translation table.
///
/// Resolution still succeeds through the fallback chain; this only records
/// which language was missing and which one is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLanguage {
    /// The language that was selected but has no translations
    pub language: LanguageCode,
    /// The language actually used, or `None` if the chain ends empty
    pub fallback: Option<LanguageCode>,
}

impl fmt::Display for MissingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fallback {
            Some(fallback) => write!(
                f,
                "The language \"{}\" is not available in the translations, falling back to \"{fallback}\"",
                self.language
            ),
            None => write!(
                f,
                "The language \"{}\" is not available in the translations and no fallback language is, keys will be shown as-is",
                self.language
            ),
        }
    }
}
