use std::path::PathBuf;

use thiserror::Error;

use super::node::SchemaError;

/// Failure to turn one locale file into a locale tree.
///
/// Load failures are per file: the store logs them and keeps loading the
/// remaining files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read locale file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON (comments and trailing commas are allowed).
    #[error("Failed to parse locale file '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },
    /// The file contains no value at all.
    #[error("Locale file '{}' is empty", path.display())]
    Empty { path: PathBuf },
    /// The document does not follow the `commands`/`responses`/`embeds` layout.
    #[error("Invalid locale file '{}': {source}", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },
}
