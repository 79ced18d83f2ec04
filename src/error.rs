use thiserror::Error;

use crate::config::ConfigError;
use crate::input::translation::LoadError;
use crate::storage::StorageError;

/// Errors surfaced by the crate's fallible operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Translation files could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The active language could not be persisted
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
