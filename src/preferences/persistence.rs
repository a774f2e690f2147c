//! Reading and writing the preference document.
//!
//! The document is one JSON object mapping the user id (as a string) to a
//! [`UserPreference`]. It is always rewritten in full.

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::path::{
    Path,
    PathBuf,
};

use super::error::PersistenceError;
use super::types::UserPreference;

/// Reads the document at `path`.
///
/// A missing file is an empty document. Entries whose key is not a numeric
/// user id are skipped.
pub(super) async fn read_document(path: &Path) -> Result<HashMap<u64, UserPreference>, PersistenceError> {
    let io_error = |source| PersistenceError::Io { path: path.to_path_buf(), source };

    if !tokio::fs::try_exists(path).await.map_err(io_error)? {
        tracing::debug!("Preference file not found: {}", path.display());
        return Ok(HashMap::new());
    }

    let content = tokio::fs::read_to_string(path).await.map_err(io_error)?;
    if content.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let document: BTreeMap<String, UserPreference> = serde_json::from_str(&content)
        .map_err(|source| PersistenceError::Deserialize { path: path.to_path_buf(), source })?;

    let mut preferences = HashMap::with_capacity(document.len());
    for (key, preference) in document {
        match key.parse::<u64>() {
            Ok(user_id) => {
                preferences.insert(user_id, preference);
            }
            Err(_) => tracing::warn!(key, "Skipping preference entry with invalid user id"),
        }
    }

    Ok(preferences)
}

/// Writes the whole document to `path`.
///
/// The content goes to a sibling temporary file first and is then renamed
/// over `path`, so readers never see a half-written document.
pub(super) async fn write_document(
    path: &Path,
    preferences: &HashMap<u64, UserPreference>,
) -> Result<(), PersistenceError> {
    let io_error = |source| PersistenceError::Io { path: path.to_path_buf(), source };

    let sorted: BTreeMap<u64, &UserPreference> = preferences.iter().map(|(id, p)| (*id, p)).collect();
    let content = serde_json::to_string_pretty(&sorted)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let temp_path = temp_path_for(path);
    tokio::fs::write(&temp_path, content).await.map_err(io_error)?;

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
            tracing::debug!("Failed to remove {}: {cleanup}", temp_path.display());
        }
        return Err(io_error(e));
    }

    Ok(())
}

/// `<file name>.tmp` next to `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
