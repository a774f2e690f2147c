//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    I18nSettings,
    loader,
};

/// 読み込んだ設定と、相対パスの基準になるワークスペース
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 検証済みの設定
    current_settings: I18nSettings,

    /// `localizationDirs` などの相対パスの基準
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// デフォルト設定、ワークスペースなしで作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ワークスペースの `.command-i18n.json` を読み込んで検証する
    ///
    /// `None` の場合はデフォルト設定を使い、相対パスはカレントディレクトリ基準になる。
    /// 失敗した場合は以前の状態を保つ。
    ///
    /// # Errors
    /// - ワークスペースがディレクトリではない
    /// - 設定ファイルの読み込み・パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        let (settings, root) = match workspace_root {
            Some(root) => {
                let loaded = loader::load_workspace(&root)?;
                (loaded.settings.unwrap_or_default(), Some(loaded.root))
            }
            None => (I18nSettings::default(), None),
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!(workspace = ?root, "Settings loaded: {:?}", settings);
        self.current_settings = settings;
        self.workspace_root = root;

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &I18nSettings {
        &self.current_settings
    }

    /// ワークスペースルートを取得
    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// ワークスペースルートからの相対パスを解決する
    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.workspace_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// 翻訳ファイルのディレクトリを決定する
    ///
    /// `localizationDirs` の候補を順に試し、最初に存在するディレクトリを返す。
    /// どれも存在しない場合は最初の候補を返す（読み込み時にエラーログが出る）。
    #[must_use]
    pub fn localization_dir(&self) -> PathBuf {
        let candidates: Vec<PathBuf> = self
            .current_settings
            .localization_dirs
            .iter()
            .map(|dir| self.resolve_path(dir))
            .collect();

        if let Some(found) = candidates.iter().find(|dir| dir.is_dir()) {
            tracing::info!("Found localization directory: {}", found.display());
            return found.clone();
        }

        candidates.into_iter().next().unwrap_or_else(|| self.resolve_path(Path::new("Localization")))
    }

    /// ユーザー設定ファイルのパス
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.resolve_path(&self.current_settings.preferences.file_path)
    }
}
