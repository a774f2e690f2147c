//! ワークスペースの特定と設定ファイルの読み込み

use std::io::ErrorKind;
use std::path::{
    Path,
    PathBuf,
};

use jsonc_parser::ParseOptions;

use super::{
    ConfigError,
    I18nSettings,
};

/// ワークスペース直下の設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".command-i18n.json";

/// 読み込み結果
#[derive(Debug)]
pub(super) struct WorkspaceSettings {
    /// 相対パスの基準になるディレクトリ
    pub root: PathBuf,
    /// 設定ファイルの内容（ファイルが無い・空の場合は `None`）
    pub settings: Option<I18nSettings>,
}

/// ワークスペースを確認し、設定ファイルがあれば読み込む
///
/// 設定ファイルはロケールファイルと同じく JSONC（コメント・末尾カンマ可）。
///
/// # Errors
/// - `WorkspaceNotFound`: `workspace_root` がディレクトリではない
/// - `Io`: 設定ファイルを読めない
/// - `Syntax`: JSONC として不正
/// - `Schema`: フィールドの型が合わない
pub(super) fn load_workspace(workspace_root: &Path) -> Result<WorkspaceSettings, ConfigError> {
    if !workspace_root.is_dir() {
        return Err(ConfigError::WorkspaceNotFound { path: workspace_root.to_path_buf() });
    }

    let config_path = workspace_root.join(CONFIG_FILE_NAME);
    let settings = match std::fs::read_to_string(&config_path) {
        Ok(content) => parse_settings(&config_path, &content)?,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!("No {CONFIG_FILE_NAME} in {}, using defaults", workspace_root.display());
            None
        }
        Err(source) => return Err(ConfigError::Io { path: config_path, source }),
    };

    Ok(WorkspaceSettings { root: workspace_root.to_path_buf(), settings })
}

/// 設定ファイルの内容を解釈する。空のドキュメントは `None`。
fn parse_settings(path: &Path, content: &str) -> Result<Option<I18nSettings>, ConfigError> {
    let Some(document) = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
        .map_err(|error| ConfigError::Syntax { path: path.to_path_buf(), message: error.to_string() })?
    else {
        tracing::debug!("{} is empty, using defaults", path.display());
        return Ok(None);
    };

    let settings = serde_json::from_value(document)
        .map_err(|source| ConfigError::Schema { path: path.to_path_buf(), source })?;
    tracing::debug!("Loaded settings from {}", path.display());

    Ok(Some(settings))
}
