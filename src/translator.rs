//! Key lookup against a [`TranslationStore`] with a persisted active language.
//!
//! A [`Translator`] can only be built from a store and a storage, so there is
//! no way to use it without the data it depends on.

mod diagnostic;
mod resolve;

pub use diagnostic::MissingLanguage;
pub use resolve::{
    effective_fallback,
    resolve_text,
    select_messages,
};

use crate::selector::LanguageSelector;
use crate::storage::{
    LanguageStorage,
    StorageError,
};
use crate::store::TranslationStore;
use crate::types::LanguageCode;

/// Resolves translation keys for the active language.
#[derive(Debug)]
pub struct Translator<'a, S> {
    /// Borrowed, never mutated
    store: &'a TranslationStore,
    /// Active language persistence
    selector: LanguageSelector<S>,
    /// Result of the last active-language check
    missing_language: Option<MissingLanguage>,
}

impl<'a, S: LanguageStorage> Translator<'a, S> {
    /// Sets up a translator and checks that the active language has translations.
    ///
    /// If it doesn't, a warning is logged and recorded in
    /// [`missing_language`](Self::missing_language). The check happens here,
    /// whether or not anything is resolved afterwards.
    #[must_use]
    pub fn new(store: &'a TranslationStore, storage: S) -> Self {
        let selector = LanguageSelector::for_store(storage, store);
        let mut translator = Self { store, selector, missing_language: None };
        translator.check_active_language();
        translator
    }

    /// Re-reads the active language and records whether the table lacks it.
    fn check_active_language(&mut self) {
        let language = self.selector.get();
        let table = self.store.translation_table();

        self.missing_language = if table.contains_language(&language) {
            None
        } else {
            let fallback =
                effective_fallback(table, None, self.store.default_language_code())
                    .map(|(code, _)| code.to_string());
            let diagnostic = MissingLanguage { language, fallback };
            tracing::warn!("{diagnostic}");
            Some(diagnostic)
        };
    }

    /// Resolves `key` to display text.
    ///
    /// - `language_code` defaults to the active language.
    /// - `fallback_language_code` defaults to the store's default language.
    ///
    /// Never fails: an unknown language goes through the fallback chain and an
    /// unknown key is returned as-is.
    #[must_use]
    pub fn resolve<'s>(
        &'s self,
        key: &'s str,
        language_code: Option<&str>,
        fallback_language_code: Option<&str>,
    ) -> &'s str {
        let default_language = self.store.default_language_code();
        let table = self.store.translation_table();

        match language_code {
            Some(language) => {
                resolve_text(table, key, language, fallback_language_code, default_language)
            }
            None => {
                let active = self.selector.get();
                resolve_text(table, key, &active, fallback_language_code, default_language)
            }
        }
    }

    /// Resolves `key` in the active language.
    #[must_use]
    pub fn translate<'s>(&'s self, key: &'s str) -> &'s str {
        self.resolve(key, None, None)
    }

    /// The active language.
    #[must_use]
    pub fn active_language(&self) -> LanguageCode {
        self.selector.get()
    }

    /// Persists `code` as the active language.
    ///
    /// `code` is not checked against the table; an unknown code only makes
    /// later lookups use the fallback chain. The active-language check is
    /// redone for the new code.
    ///
    /// # Errors
    /// Propagates the storage failure.
    pub fn change_language(&mut self, code: &str) -> Result<(), StorageError> {
        self.selector.set(code)?;
        self.check_active_language();
        Ok(())
    }

    /// The diagnostic recorded by the last active-language check, if any.
    #[must_use]
    pub const fn missing_language(&self) -> Option<&MissingLanguage> {
        self.missing_language.as_ref()
    }

    /// The store this translator reads from.
    #[must_use]
    pub const fn store(&self) -> &'a TranslationStore {
        self.store
    }
}
