use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::locale::DEFAULT_LOCALE;

/// One user's language override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    /// Locale code chosen by the user.
    #[serde(default = "default_locale", alias = "Locale")]
    pub locale: String,

    /// Display name at the time of the last update.
    #[serde(default = "default_username", alias = "Username")]
    pub username: String,

    /// When the entry was last written.
    #[serde(default = "Utc::now", alias = "LastUpdated")]
    pub last_updated: DateTime<Utc>,
}

impl UserPreference {
    #[must_use]
    pub fn new(locale: impl Into<String>, username: impl Into<String>, last_updated: DateTime<Utc>) -> Self {
        Self { locale: locale.into(), username: username.into(), last_updated }
    }
}

/// Locale used when a stored entry has none.
fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Display name used when a stored entry has none.
fn default_username() -> String {
    "Unknown".to_string()
}
