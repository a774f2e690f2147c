use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use super::matcher::DEFAULT_LOCALE_FILE_PATTERN;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localizationDirs[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// `--workspace` (or the embedding host) named something that is not a directory.
    #[error("Workspace directory not found: {}", .path.display())]
    WorkspaceNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not JSON, even allowing comments and trailing commas.
    #[error("Failed to parse {}: {message}", .path.display())]
    Syntax { path: PathBuf, message: String },

    /// Valid JSON whose fields have the wrong shape.
    #[error("Invalid settings in {}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Candidate localization directories, tried in order.
    ///
    /// Relative entries are resolved against the workspace root. The first
    /// existing directory wins; if none exists the first entry is used.
    pub localization_dirs: Vec<PathBuf>,

    pub locale_files: LocaleFilesConfig,
    pub preferences: PreferencesConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleFilesConfig {
    /// Glob matched against file names inside the localization directory.
    pub file_pattern: String,
}

impl Default for LocaleFilesConfig {
    fn default() -> Self {
        Self { file_pattern: DEFAULT_LOCALE_FILE_PATTERN.to_string() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesConfig {
    /// Preference document, relative to the workspace root unless absolute.
    pub file_path: PathBuf,

    /// Entries not updated for this many days are removed by cleanup.
    pub max_age_days: u32,

    /// Periodic cleanup interval.
    ///
    /// - `None`: no background sweep (default)
    /// - `Some(hours)`: sweep every `hours`
    pub cleanup_interval_hours: Option<u64>,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("user_preferences.json"),
            max_age_days: 30,
            cleanup_interval_hours: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    /// Number of missing keys listed in each validation error.
    pub sample_size: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { sample_size: 5 }
    }
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Zero durations or sizes
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.localization_dirs.is_empty() {
            errors.push(ValidationError::new(
                "localizationDirs",
                "At least one directory is required. Example: [\"Discord/Localization\"]",
            ));
        }

        for (index, dir) in self.localization_dirs.iter().enumerate() {
            if dir.as_os_str().is_empty() {
                errors.push(ValidationError::new(
                    format!("localizationDirs[{index}]"),
                    "The directory cannot be empty",
                ));
            }
        }

        if self.locale_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "localeFiles.filePattern",
                "The pattern cannot be empty. Example: \"*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.locale_files.file_pattern) {
            errors.push(ValidationError::new(
                "localeFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.locale_files.file_pattern),
            ));
        }

        if self.preferences.file_path.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "preferences.filePath",
                "The path cannot be empty. Example: \"user_preferences.json\"",
            ));
        }

        if self.preferences.max_age_days == 0 {
            errors.push(ValidationError::new(
                "preferences.maxAgeDays",
                "The age must be at least 1 day",
            ));
        }

        if self.preferences.cleanup_interval_hours == Some(0) {
            errors.push(ValidationError::new(
                "preferences.cleanupIntervalHours",
                "The interval must be at least 1 hour, or remove this field to disable cleanup",
            ));
        }

        if self.validation.sample_size == 0 {
            errors.push(ValidationError::new(
                "validation.sampleSize",
                "The sample size must be at least 1",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            localization_dirs: vec![
                PathBuf::from("Discord/Localization"),
                PathBuf::from("Server/Discord/Localization"),
                PathBuf::from("Localization"),
            ],
            locale_files: LocaleFilesConfig::default(),
            preferences: PreferencesConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}
