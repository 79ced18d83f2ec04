//! JSON file storage, persisted across process restarts.

use std::collections::BTreeMap;
use std::io::Write as _;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    LanguageStorage,
    StorageError,
};

/// Storage backed by a JSON object file such as `{"pol.language": "es"}`.
///
/// Every call goes to disk, so separate instances on the same path observe each
/// other's writes. A missing file reads as empty. Writes replace the file
/// atomically through a sibling temporary file, so readers never see a
/// partially written object.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Path to the JSON file
    path: PathBuf,
}

impl FileStorage {
    /// Creates a storage for `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all stored values.
    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl LanguageStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let content = serde_json::to_string_pretty(&values)?;
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        tracing::debug!(path = %self.path.display(), key, value, "Stored value");

        Ok(())
    }
}
