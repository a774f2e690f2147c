//! File pattern matcher for locale documents.

use std::path::Path;

use globset::{
    Glob,
    GlobMatcher,
};

use super::I18nSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid locale file pattern '{pattern}': {source}")]
    InvalidLocalePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Default pattern for locale documents inside the localization directory.
pub const DEFAULT_LOCALE_FILE_PATTERN: &str = "*.json";

/// Decides which files in the localization directory are locale documents.
///
/// The pattern is matched against the file name only; the locale code is the
/// file stem (`fr.json` → `fr`).
#[derive(Debug, Clone)]
pub struct LocaleFileMatcher {
    /// Source glob.
    pattern: String,
    /// Compiled glob.
    matcher: GlobMatcher,
}

impl LocaleFileMatcher {
    /// Creates a matcher from a glob pattern.
    pub fn new(pattern: &str) -> Result<Self, MatcherError> {
        let glob = Glob::new(pattern).map_err(|source| MatcherError::InvalidLocalePattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self { pattern: pattern.to_string(), matcher: glob.compile_matcher() })
    }

    /// Creates a matcher from `localeFiles.filePattern`.
    pub fn from_settings(settings: &I18nSettings) -> Result<Self, MatcherError> {
        Self::new(&settings.locale_files.file_pattern)
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the file name matches the pattern.
    #[must_use]
    pub fn is_locale_file(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.matcher.is_match(Path::new(name)))
    }

    /// Locale code for a locale document path: its file stem.
    #[must_use]
    pub fn locale_code(path: &Path) -> Option<String> {
        path.file_stem().map(|stem| stem.to_string_lossy().to_string()).filter(|code| !code.is_empty())
    }
}
