//! Translation file loading

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use serde_json::Value;
use thiserror::Error;

use crate::types::{
    LanguageCode,
    Messages,
    TranslationTable,
};

/// ISO 639-1 primary language subtags.
const PRIMARY_SUBTAGS: &[&str] = &[
    "af", "am", "ar", "as", "az", "be", "bg", "bn", "bo", "bs", "ca", "cs", "cy", "da", "de", "dv",
    "el", "en", "eo", "es", "et", "eu", "fa", "fi", "fo", "fr", "ga", "gd", "gl", "gu", "ha", "he",
    "hi", "hr", "hu", "hy", "id", "ig", "is", "it", "ja", "ka", "kk", "km", "kn", "ko", "ku", "ky",
    "la", "lb", "lo", "lt", "lv", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "nb", "ne", "nl",
    "nn", "no", "ns", "or", "pa", "pl", "ps", "pt", "qu", "ro", "ru", "rw", "sa", "sd", "se", "si",
    "sk", "sl", "so", "sq", "sr", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "tr",
    "ts", "tt", "ug", "uk", "ur", "uz", "vi", "wo", "xh", "yi", "yo", "zh", "zu",
];

/// Errors raised while loading translation files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when failing to read a translation file
    #[error("Failed to read translation file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Error when a translation file is not valid JSON
    #[error("Failed to parse JSON in {path}: {source}")]
    Parse {
        /// File that could not be parsed
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
    /// A JSON value that must be an object is something else
    #[error("Expected a JSON object for '{0}'")]
    NotAnObject(String),
    /// Invalid glob pattern
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        /// Offending pattern
        pattern: String,
        /// Underlying glob error
        source: globset::Error,
    },
}

/// Whether a single path segment looks like a language tag.
///
/// The primary subtag must be a known ISO 639-1 code (case-insensitive).
/// Following subtags, separated by `-` or `_`, may be a script (`Hant`),
/// a region (`US`) or a numeric region (`419`).
fn is_language_tag(segment: &str) -> bool {
    let mut subtags = segment.split(['-', '_']);
    let Some(primary) = subtags.next() else {
        return false;
    };
    if !PRIMARY_SUBTAGS.contains(&primary.to_ascii_lowercase().as_str()) {
        return false;
    }

    subtags.all(|subtag| match subtag.len() {
        2 | 4 => subtag.chars().all(|c| c.is_ascii_alphabetic()),
        3 => subtag.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    })
}

/// Detect language from file path heuristically
///
/// Splits the path by '/' and '.', then searches backwards for a part
/// that looks like a language tag.
///
/// # Examples
/// - `locales/en.json` → `en`
/// - `messages/ja-JP.json` → `ja-JP`
/// - `translations/en_US/common.json` → `en_US`
#[must_use]
pub fn detect_language_from_path(file_path: &Path) -> Option<LanguageCode> {
    let path_str = file_path.to_string_lossy();
    path_str
        .split(['/', '\\', '.'])
        .rev()
        .find(|part| is_language_tag(part))
        .map(ToString::to_string)
}

/// Flatten nested JSON object into separator-joined key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use pol_i18n::input::translation::flatten_json;
///
/// let json = json!({
///     "common": {
///         "hello": "Hello",
///         "goodbye": "Goodbye"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("common.hello"), Some(&"Hello".to_string()));
/// assert_eq!(flattened.get("common.goodbye"), Some(&"Goodbye".to_string()));
/// ```
#[must_use]
pub fn flatten_json(json: &Value, separator: &str, prefix: Option<&str>) -> Messages {
    let mut result = Messages::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive worker of [`flatten_json`].
fn flatten_json_value(json: &Value, separator: &str, prefix: Option<&str>, result: &mut Messages) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

/// Read and parse a JSON file.
fn read_json(file_path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|source| LoadError::Io { path: file_path.to_path_buf(), source })?;
    serde_json::from_str(&content)
        .map_err(|source| LoadError::Parse { path: file_path.to_path_buf(), source })
}

/// Read a per-language file and flatten its messages.
fn read_messages(file_path: &Path, separator: &str) -> Result<Messages, LoadError> {
    let json = read_json(file_path)?;
    if !json.is_object() {
        return Err(LoadError::NotAnObject(file_path.display().to_string()));
    }
    Ok(flatten_json(&json, separator, None))
}

/// Load a per-language translation file.
///
/// Returns the language detected from `file_path` (if any) and the flattened
/// messages. Every segment of the given path takes part in detection; pass a
/// path relative to the translation root to keep parent directories out.
///
/// # Errors
/// Returns error if file read or JSON parse fails, or the root is not an object.
pub fn load_translation_file(
    file_path: &Path,
    separator: &str,
) -> Result<(Option<LanguageCode>, Messages), LoadError> {
    let messages = read_messages(file_path, separator)?;
    Ok((detect_language_from_path(file_path), messages))
}

/// Load a whole table from one file whose top-level keys are language codes.
///
/// # Errors
/// Returns error if file read or JSON parse fails, or the shape is wrong.
pub fn load_table_file(file_path: &Path, separator: &str) -> Result<TranslationTable, LoadError> {
    tracing::debug!(path = %file_path.display(), "Loading translation table file");
    let json = read_json(file_path)?;
    TranslationTable::from_json(&json, separator)
}

/// Build a glob set from patterns.
fn build_glob_set<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<GlobSet, LoadError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|source| LoadError::Pattern { pattern: pattern.to_string(), source })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| LoadError::Pattern { pattern: "<set>".to_string(), source })
}

/// A translation file found under a root.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FoundFile {
    /// Path relative to the root, used for matching and language detection
    relative: PathBuf,
    /// Path to read from
    absolute: PathBuf,
}

/// Find translation files under `root` matching `file_pattern`.
///
/// Paths are matched relative to `root`. Results are sorted so that merges
/// are deterministic.
fn find_translation_files(
    root: &Path,
    file_pattern: &str,
    exclude_patterns: &[String],
) -> Result<Vec<FoundFile>, LoadError> {
    let include_set = build_glob_set([file_pattern])?;
    let exclude_set = build_glob_set(exclude_patterns.iter().map(String::as_str))?;

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
            continue;
        }

        found_files.push(FoundFile {
            relative: relative_path.to_path_buf(),
            absolute: path.to_path_buf(),
        });
    }

    found_files.sort();
    Ok(found_files)
}

/// Load every per-language file under `root` into a single table.
///
/// Files of the same language are merged; later files (in path order) win on
/// duplicate keys. The language comes from the path below `root` only; files
/// without a language tag there are skipped.
///
/// # Errors
/// Returns error on invalid patterns, or if a matched file cannot be read or parsed.
pub fn load_translation_dir(
    root: &Path,
    file_pattern: &str,
    exclude_patterns: &[String],
    separator: &str,
) -> Result<TranslationTable, LoadError> {
    tracing::debug!(root = %root.display(), file_pattern, "Loading translation files");

    let mut table = TranslationTable::new();
    for file in find_translation_files(root, file_pattern, exclude_patterns)? {
        let Some(language) = detect_language_from_path(&file.relative) else {
            tracing::warn!("Could not detect language of {:?}, skipping", file.relative);
            continue;
        };
        let messages = read_messages(&file.absolute, separator)?;
        tracing::debug!(%language, keys = messages.len(), "Loaded {:?}", file.relative);
        table.merge_language(language, messages);
    }

    Ok(table)
}
