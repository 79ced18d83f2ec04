//! pol-i18n
//!
//! Flat translation lookup: a [`TranslationStore`] holds the translation table
//! and default language, a [`LanguageStorage`] persists the active language,
//! and a [`Translator`] resolves keys through the fallback chain
//! requested → explicit fallback → default → `"en"` → the key itself.

pub mod config;
pub mod error;
pub mod input;
pub mod selector;
pub mod storage;
pub mod store;
mod test_utils;
pub mod translator;
pub mod types;

pub use error::Error;
pub use selector::LanguageSelector;
pub use storage::{
    FileStorage,
    LanguageStorage,
    MemoryStorage,
    StorageError,
};
pub use store::TranslationStore;
pub use translator::{
    MissingLanguage,
    Translator,
};
