//! 設定ファイルの読み込みとバリデーション
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
pub use types::{
    ConfigError,
    I18nSettings,
    StorageConfig,
    TranslationFilesConfig,
    ValidationError,
};
