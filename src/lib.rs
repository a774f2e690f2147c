//! command-i18n
//!
//! マルチロケールなコマンドインターフェース向けの翻訳解決エンジンとユーザー言語設定

pub mod config;
pub mod context;
pub mod format;
pub mod locale;
pub mod maintenance;
pub mod preferences;

#[cfg(test)]
mod test_utils;

// I18nContext を再エクスポート
pub use context::I18nContext;
