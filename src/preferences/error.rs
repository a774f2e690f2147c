use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or write the preference document.
///
/// Never returned from the public store API: the store logs it and keeps its
/// in-memory state.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to access preference file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preference file '{}': {source}", path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}
