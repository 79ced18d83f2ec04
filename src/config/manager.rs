//! ワークスペース設定の読み込みと解決

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    I18nSettings,
};
use crate::input::translation::LoadError;
use crate::store::TranslationStore;

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".pol-i18n.json";

/// 1 つのワークスペースに対する検証済みの設定
///
/// 設定内の相対パス（`storage.path`, `translationFiles.tableFile`）は
/// 読み込み時にワークスペースルートを基準に絶対化される。
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// パス解決済みの設定
    settings: I18nSettings,

    /// ワークスペースのルートパス
    workspace_root: PathBuf,
}

impl ConfigManager {
    /// ワークスペースの設定を読み込む
    ///
    /// `.pol-i18n.json` が無ければデフォルト設定を使う。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load(workspace_root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let workspace_root = workspace_root.into();
        let config_path = workspace_root.join(CONFIG_FILE_NAME);

        let settings = match std::fs::read_to_string(&config_path) {
            Ok(content) => {
                tracing::debug!("Loading configuration from: {:?}", config_path);
                serde_json::from_str(&content)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Configuration file not found: {:?}", config_path);
                I18nSettings::default()
            }
            Err(e) => return Err(e.into()),
        };

        Self::with_settings(workspace_root, settings)
    }

    /// 既存の設定からマネージャーを作る（ファイルは読まない）
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn with_settings(
        workspace_root: impl Into<PathBuf>,
        mut settings: I18nSettings,
    ) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        let workspace_root = workspace_root.into();
        settings.storage.path = resolve(&workspace_root, &settings.storage.path);
        if let Some(table_file) = &mut settings.translation_files.table_file {
            *table_file = resolve(&workspace_root, table_file);
        }
        tracing::debug!("Settings loaded successfully: {:?}", settings);

        Ok(Self { settings, workspace_root })
    }

    /// パス解決済みの設定を取得
    #[must_use]
    pub const fn settings(&self) -> &I18nSettings {
        &self.settings
    }

    /// ワークスペースルートを取得
    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// 言語の保存先ファイルのパスを取得
    #[must_use]
    pub fn storage_path(&self) -> &Path {
        &self.settings.storage.path
    }

    /// 設定に従って翻訳ファイルを読み込み、ストアを作る
    ///
    /// # Errors
    /// 翻訳ファイルの読み込みエラー
    pub fn load_store(&self) -> Result<TranslationStore, LoadError> {
        TranslationStore::from_settings(&self.settings, &self.workspace_root)
    }
}

/// 相対パスを `root` 基準で解決する
fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_relative() { root.join(path) } else { path.to_path_buf() }
}
