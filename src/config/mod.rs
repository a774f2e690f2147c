//! Settings for locale discovery, preference storage and validation.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Locale file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use matcher::{
    DEFAULT_LOCALE_FILE_PATTERN,
    LocaleFileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    I18nSettings,
    LocaleFilesConfig,
    PreferencesConfig,
    ValidationConfig,
    ValidationError,
};
