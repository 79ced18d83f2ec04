//! Pure resolution of a key against a translation table.

use crate::types::{
    FINAL_FALLBACK_LANGUAGE,
    Messages,
    TranslationTable,
};

/// Languages tried, in order, when `language` is not in the table.
///
/// Explicit fallback (if any), then the configured default, then
/// [`FINAL_FALLBACK_LANGUAGE`]. Duplicates are kept; they are harmless for lookup.
fn fallback_candidates<'a>(
    fallback_language: Option<&'a str>,
    default_language: &'a str,
) -> impl Iterator<Item = &'a str> {
    fallback_language.into_iter().chain([default_language, FINAL_FALLBACK_LANGUAGE])
}

/// The first fallback language that the table actually has.
///
/// `None` means every key will echo itself.
#[must_use]
pub fn effective_fallback<'t>(
    table: &'t TranslationTable,
    fallback_language: Option<&str>,
    default_language: &str,
) -> Option<(&'t str, &'t Messages)> {
    fallback_candidates(fallback_language, default_language).find_map(|code| table.entry(code))
}

/// Messages to search for `language`, following the fallback chain if the table lacks it.
#[must_use]
pub fn select_messages<'t>(
    table: &'t TranslationTable,
    language: &str,
    fallback_language: Option<&str>,
    default_language: &str,
) -> Option<&'t Messages> {
    table.messages(language).or_else(|| {
        effective_fallback(table, fallback_language, default_language).map(|(_, messages)| messages)
    })
}

/// Resolves `key` to display text.
///
/// Total: when no language along the chain has the key, the key itself is
/// returned so missing translations stay visible.
///
/// # Examples
/// ```
/// use pol_i18n::translator::resolve_text;
/// use pol_i18n::types::TranslationTable;
///
/// let table: TranslationTable =
///     serde_json::from_str(r#"{"en": {"greeting": "Hello"}}"#).unwrap_or_default();
///
/// assert_eq!(resolve_text(&table, "greeting", "fr", None, "de"), "Hello");
/// assert_eq!(resolve_text(&table, "farewell", "en", None, "en"), "farewell");
/// ```
#[must_use]
pub fn resolve_text<'a>(
    table: &'a TranslationTable,
    key: &'a str,
    language: &str,
    fallback_language: Option<&str>,
    default_language: &str,
) -> &'a str {
    let Some(messages) = select_messages(table, language, fallback_language, default_language)
    else {
        tracing::trace!(key, language, "No messages along the fallback chain");
        return key;
    };

    messages.get(key).map_or_else(
        || {
            tracing::trace!(key, language, "Missing translation key");
            key
        },
        String::as_str,
    )
}
