//! 翻訳・ユーザー設定の共有コンテキスト

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::{
    ConfigManager,
    LocaleFileMatcher,
    MatcherError,
    PreferencesConfig,
};
use crate::format::Localizer;
use crate::locale::{
    DEFAULT_LOCALE,
    LocaleStore,
};
use crate::preferences::PreferenceStore;

/// 1時間
const HOUR: Duration = Duration::from_secs(60 * 60);
/// 1日
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// コマンド層に渡す共有コンテキスト
///
/// 起動時に一度だけ構築し、参照（またはクローン）で各ハンドラーに渡します。
/// クローンは同じストアを共有します。
#[derive(Debug, Clone)]
pub struct I18nContext {
    /// 翻訳の解決とフォーマット
    localizer: Localizer,
    /// ユーザーごとの言語設定
    preferences: Arc<PreferenceStore>,
}

impl I18nContext {
    /// 既存のストアからコンテキストを作成
    #[must_use]
    pub const fn new(localizer: Localizer, preferences: Arc<PreferenceStore>) -> Self {
        Self { localizer, preferences }
    }

    /// 設定に従って翻訳ファイルとユーザー設定を読み込む
    ///
    /// # Errors
    /// - 翻訳ファイルのパターンが不正
    pub async fn initialize(config: &ConfigManager) -> Result<Self, MatcherError> {
        let settings = config.get_settings();
        let matcher = LocaleFileMatcher::from_settings(settings)?;

        let store = Arc::new(LocaleStore::new(config.localization_dir(), matcher));
        store.load().await;

        let preferences = Arc::new(PreferenceStore::open(config.preferences_path()).await);

        Ok(Self::new(Localizer::new(store), preferences))
    }

    #[must_use]
    pub const fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    #[must_use]
    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// ユーザーに使うロケールを決める
    ///
    /// 優先順位: ユーザー設定 > デフォルト（`en`）。
    /// クライアントから送られるロケール情報は使わない。
    pub async fn best_locale(&self, user_id: u64) -> String {
        match self.preferences.get_user_locale(user_id).await {
            Some(locale) if !locale.is_empty() => locale,
            _ => DEFAULT_LOCALE.to_string(),
        }
    }

    /// サポートされているロケールならユーザー設定として保存する
    ///
    /// # Returns
    /// - `true`: 保存した
    /// - `false`: 未対応のロケール
    pub async fn set_user_language(&self, user_id: u64, locale: &str, username: &str) -> bool {
        if !self.localizer.is_locale_supported(locale) {
            tracing::debug!(user_id, locale, "Rejected unsupported locale");
            return false;
        }

        self.preferences.set_user_locale(user_id, locale, username).await;
        true
    }

    /// ユーザー設定を削除してデフォルトに戻す
    pub async fn reset_user_language(&self, user_id: u64) -> bool {
        self.preferences.remove_user_preferences(user_id).await
    }

    /// 翻訳ファイルを再読み込み
    pub async fn reload(&self) -> usize {
        self.localizer.reload().await
    }

    /// 設定に `cleanupIntervalHours` があれば定期クリーンアップを開始する
    #[must_use]
    pub fn spawn_cleanup_task(&self, config: &PreferencesConfig) -> Option<JoinHandle<()>> {
        let hours = config.cleanup_interval_hours?;
        let every = HOUR.saturating_mul(u32::try_from(hours).unwrap_or(u32::MAX));
        let max_age = DAY.saturating_mul(config.max_age_days);

        tracing::info!(hours, max_age_days = config.max_age_days, "Starting periodic preference cleanup");
        Some(Arc::clone(&self.preferences).spawn_cleanup(every, max_age))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{
        english_document,
        french_document,
        write_locale,
    };

    async fn context_in(dir: &TempDir) -> I18nContext {
        let localization = dir.path().join("Localization");
        fs::create_dir_all(&localization).unwrap();
        write_locale(&localization, "en", &english_document());
        write_locale(&localization, "fr", &french_document());

        let mut config = ConfigManager::new();
        config.load_settings(Some(dir.path().to_path_buf())).unwrap();
        I18nContext::initialize(&config).await.unwrap()
    }

    #[tokio::test]
    async fn initialize_loads_discovered_directory() {
        let dir = TempDir::new().unwrap();

        let context = context_in(&dir).await;

        let preferences_path = dir.path().join("user_preferences.json");
        assert_that!(context.localizer().available_locales(), elements_are![eq("en"), eq("fr")]);
        assert_that!(context.preferences().path(), eq(preferences_path.as_path()));
    }

    #[tokio::test]
    async fn best_locale_prefers_user_override() {
        let dir = TempDir::new().unwrap();
        let context = context_in(&dir).await;

        assert_that!(context.best_locale(1).await, eq("en"));

        assert_that!(context.set_user_language(1, "fr", "alice").await, eq(true));
        assert_that!(context.best_locale(1).await, eq("fr"));

        assert_that!(context.reset_user_language(1).await, eq(true));
        assert_that!(context.best_locale(1).await, eq("en"));
    }

    #[tokio::test]
    async fn set_user_language_rejects_unsupported_locale() {
        let dir = TempDir::new().unwrap();
        let context = context_in(&dir).await;

        assert_that!(context.set_user_language(1, "xx", "alice").await, eq(false));
        assert_that!(context.preferences().get_user_locale(1).await, none());
    }

    #[tokio::test]
    async fn reload_picks_up_new_locales() {
        let dir = TempDir::new().unwrap();
        let context = context_in(&dir).await;

        write_locale(&dir.path().join("Localization"), "de", &json!({}));
        let count = context.reload().await;

        assert_that!(count, eq(3));
        assert_that!(context.localizer().is_locale_supported("de"), eq(true));
    }

    #[tokio::test]
    async fn cleanup_task_only_when_configured() {
        let dir = TempDir::new().unwrap();
        let context = context_in(&dir).await;

        let disabled = context.spawn_cleanup_task(&PreferencesConfig::default());
        assert_that!(disabled.is_none(), eq(true));

        let config = PreferencesConfig { cleanup_interval_hours: Some(1), ..PreferencesConfig::default() };
        let handle = context.spawn_cleanup_task(&config).unwrap();
        handle.abort();
    }
}
