//! Locale document loading and the shared locale snapshot.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::{
    Arc,
    PoisonError,
    RwLock,
};

use jsonc_parser::ParseOptions;
use tokio::sync::Mutex;

use super::error::LoadError;
use super::node::LocaleTree;
use super::resolver::{
    self,
    DEFAULT_LOCALE,
};
use crate::config::LocaleFileMatcher;

/// An immutable set of loaded locale trees.
///
/// A snapshot is never mutated after construction; reloads build a new one.
#[derive(Debug, Default)]
pub struct LocaleSnapshot {
    trees: HashMap<String, LocaleTree>,
}

impl LocaleSnapshot {
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub const fn new(trees: HashMap<String, LocaleTree>) -> Self {
        Self { trees }
    }

    #[must_use]
    pub fn tree(&self, locale: &str) -> Option<&LocaleTree> {
        self.trees.get(locale)
    }

    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.trees.contains_key(locale)
    }

    /// Loaded locale codes, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.trees.keys().cloned().collect();
        locales.sort();
        locales
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// See [`resolver::lookup`].
    #[must_use]
    pub fn lookup(&self, path: &str, locale: &str) -> Option<&str> {
        resolver::lookup(self, path, locale)
    }

    /// See [`resolver::resolve`].
    #[must_use]
    pub fn resolve(&self, path: &str, locale: &str) -> String {
        resolver::resolve(self, path, locale)
    }
}

/// Loads locale documents from a directory and serves resolution reads.
///
/// Readers take the current snapshot under a short read lock and resolve
/// against it without holding the lock. `load`/`reload` build a complete new
/// snapshot first and then swap it in, so a reader sees either the old or the
/// new set of trees, never a mix.
#[derive(Debug)]
pub struct LocaleStore {
    /// Directory holding one document per locale.
    directory: PathBuf,
    /// Selects locale documents inside `directory`.
    matcher: LocaleFileMatcher,
    /// Current snapshot.
    snapshot: RwLock<Arc<LocaleSnapshot>>,
    /// Serializes loads so two reloads cannot interleave their swaps.
    load_lock: Mutex<()>,
}

impl LocaleStore {
    /// Creates an empty store. Nothing is loaded until [`LocaleStore::load`].
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, matcher: LocaleFileMatcher) -> Self {
        Self {
            directory: directory.into(),
            matcher,
            snapshot: RwLock::new(Arc::new(LocaleSnapshot::default())),
            load_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<LocaleSnapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Loads every locale document in the directory.
    ///
    /// Unreadable or malformed documents are logged and skipped. A missing
    /// directory counts as zero documents. Afterwards the default locale is
    /// always present (an empty tree is created if no document provided it).
    ///
    /// Returns the number of loaded locales.
    pub async fn load(&self) -> usize {
        let _guard = self.load_lock.lock().await;

        let trees = read_locale_directory(&self.directory, &self.matcher).await;
        let count = self.install(trees);

        tracing::info!(
            "Loaded {count} localizations: {}",
            self.snapshot().locales().join(", ")
        );
        count
    }

    /// Discards every loaded tree and loads the directory again.
    pub async fn reload(&self) -> usize {
        tracing::info!(directory = %self.directory.display(), "Reloading localizations");
        self.load().await
    }

    /// Replaces the loaded trees wholesale with an already-built set.
    ///
    /// The default locale invariant applies here as well.
    #[allow(clippy::implicit_hasher)]
    pub fn replace(&self, trees: HashMap<String, LocaleTree>) -> usize {
        self.install(trees)
    }

    /// Swaps in a new snapshot built from `trees`.
    fn install(&self, mut trees: HashMap<String, LocaleTree>) -> usize {
        if !trees.contains_key(DEFAULT_LOCALE) {
            tracing::warn!("Default localization '{DEFAULT_LOCALE}' not found, creating empty fallback");
            trees.insert(DEFAULT_LOCALE.to_string(), LocaleTree::empty());
        }

        let snapshot = Arc::new(LocaleSnapshot::new(trees));
        let count = snapshot.len();
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
        count
    }

    /// Loaded locale codes, sorted.
    #[must_use]
    pub fn available_locales(&self) -> Vec<String> {
        self.snapshot().locales()
    }

    #[must_use]
    pub fn is_locale_supported(&self, locale: &str) -> bool {
        self.snapshot().contains(locale)
    }

    /// Resolves `path`, returning `None` on a miss.
    #[must_use]
    pub fn lookup(&self, path: &str, locale: &str) -> Option<String> {
        self.snapshot().lookup(path, locale).map(str::to_string)
    }

    /// Resolves `path`, returning `path` itself on a miss.
    #[must_use]
    pub fn resolve(&self, path: &str, locale: &str) -> String {
        self.snapshot().resolve(path, locale)
    }
}

/// Reads every matching document in `directory`.
///
/// Files are read concurrently; failures are logged per file.
async fn read_locale_directory(
    directory: &Path,
    matcher: &LocaleFileMatcher,
) -> HashMap<String, LocaleTree> {
    let files = match find_locale_files(directory, matcher).await {
        Ok(files) => files,
        Err(error) => {
            tracing::error!("Localization directory not found: {} ({error})", directory.display());
            return HashMap::new();
        }
    };

    let futures: Vec<_> = files
        .iter()
        .map(|path| async move { (path, load_locale_file(path).await) })
        .collect();
    let results = futures::future::join_all(futures).await;

    let mut trees = HashMap::new();
    for (path, result) in results {
        let Some(locale) = LocaleFileMatcher::locale_code(path) else {
            continue;
        };

        match result {
            Ok(tree) => {
                tracing::info!("Loaded localization for '{locale}' from {}", path.display());
                if trees.insert(locale.clone(), tree).is_some() {
                    tracing::warn!("Duplicate localization for '{locale}', using {}", path.display());
                }
            }
            Err(error) => {
                tracing::error!("{error}");
            }
        }
    }

    trees
}

/// Lists matching files in `directory`, sorted by path.
async fn find_locale_files(
    directory: &Path,
    matcher: &LocaleFileMatcher,
) -> std::io::Result<Vec<PathBuf>> {
    let mut found_files = Vec::new();
    let mut entries = tokio::fs::read_dir(directory).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_file = entry.file_type().await.is_ok_and(|ft| ft.is_file());
        if is_file && matcher.is_locale_file(&path) {
            found_files.push(path);
        } else {
            tracing::debug!("Skipping {}", path.display());
        }
    }

    found_files.sort();
    Ok(found_files)
}

/// Reads and parses one locale document.
async fn load_locale_file(path: &Path) -> Result<LocaleTree, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;

    parse_locale_document(path, &content)
}

/// Parses locale document text. Comments and trailing commas are accepted.
///
/// # Errors
/// Returns [`LoadError`] for invalid JSON, an empty document, or a document
/// that does not follow the section layout.
pub fn parse_locale_document(path: &Path, content: &str) -> Result<LocaleTree, LoadError> {
    let document = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
        .map_err(|error| LoadError::Parse { path: path.to_path_buf(), message: error.to_string() })?
        .ok_or_else(|| LoadError::Empty { path: path.to_path_buf() })?;

    LocaleTree::from_json(&document)
        .map_err(|source| LoadError::Schema { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{
        locale_store,
        write_locale,
    };

    #[tokio::test]
    async fn load_reads_every_locale_document() {
        let dir = TempDir::new().unwrap();
        write_locale(dir.path(), "en", &json!({ "responses": { "errors": { "general": "Error: {0}" } } }));
        write_locale(dir.path(), "fr", &json!({ "responses": { "errors": { "general": "Erreur : {0}" } } }));

        let store = locale_store(dir.path());
        let count = store.load().await;

        assert_that!(count, eq(2));
        assert_that!(store.available_locales(), elements_are![eq("en"), eq("fr")]);
        assert_that!(store.resolve("responses.errors.general", "fr"), eq("Erreur : {0}"));
    }

    #[tokio::test]
    async fn load_skips_malformed_documents() {
        let dir = TempDir::new().unwrap();
        write_locale(dir.path(), "en", &json!({ "responses": { "hello": "Hello" } }));
        fs::write(dir.path().join("de.json"), "{ \"responses\": ").unwrap();
        fs::write(dir.path().join("es.json"), "[1, 2, 3]").unwrap();
        fs::write(dir.path().join("it.json"), "").unwrap();
        write_locale(dir.path(), "ja", &json!({ "responses": "not an object" }));

        let store = locale_store(dir.path());
        store.load().await;

        assert_that!(store.available_locales(), elements_are![eq("en")]);
        assert_that!(store.resolve("responses.hello", "en"), eq("Hello"));
    }

    #[tokio::test]
    async fn load_ignores_files_not_matching_pattern() {
        let dir = TempDir::new().unwrap();
        write_locale(dir.path(), "en", &json!({}));
        fs::write(dir.path().join("notes.txt"), "{}").unwrap();
        fs::create_dir(dir.path().join("fr.json")).unwrap();

        let store = locale_store(dir.path());
        store.load().await;

        assert_that!(store.available_locales(), elements_are![eq("en")]);
    }

    #[tokio::test]
    async fn load_accepts_comments_and_trailing_commas() {
        let dir = TempDir::new().unwrap();
        let content = r#"// French
{
  "responses": {
    "hello": "Bonjour", // greeting
  },
}"#;
        fs::write(dir.path().join("fr.json"), content).unwrap();

        let store = locale_store(dir.path());
        store.load().await;

        assert_that!(store.resolve("responses.hello", "fr"), eq("Bonjour"));
    }

    #[tokio::test]
    async fn load_creates_default_locale_when_missing() {
        let dir = TempDir::new().unwrap();
        write_locale(dir.path(), "fr", &json!({ "responses": { "hello": "Bonjour" } }));

        let store = locale_store(dir.path());
        let count = store.load().await;

        assert_that!(count, eq(2));
        assert_that!(store.is_locale_supported("en"), eq(true));
        let snapshot = store.snapshot();
        assert_that!(snapshot.tree("en"), some(eq(&LocaleTree::empty())));
    }

    #[tokio::test]
    async fn load_missing_directory_yields_only_default_locale() {
        let dir = TempDir::new().unwrap();

        let store = locale_store(&dir.path().join("does-not-exist"));
        let count = store.load().await;

        assert_that!(count, eq(1));
        assert_that!(store.available_locales(), elements_are![eq("en")]);
    }

    #[googletest::test]
    fn store_is_empty_before_load() {
        let store = locale_store(Path::new("/nonexistent"));

        expect_that!(store.available_locales(), is_empty());
        expect_that!(store.is_locale_supported("en"), eq(false));
        expect_that!(store.resolve("responses.hello", "en"), eq("responses.hello"));
    }

    #[tokio::test]
    async fn reload_replaces_trees_wholesale() {
        let dir = TempDir::new().unwrap();
        write_locale(dir.path(), "en", &json!({ "responses": { "hello": "Hello" } }));
        write_locale(dir.path(), "fr", &json!({ "responses": { "hello": "Bonjour" } }));

        let store = locale_store(dir.path());
        store.load().await;

        fs::remove_file(dir.path().join("fr.json")).unwrap();
        write_locale(dir.path(), "en", &json!({ "responses": { "hello": "Hi" } }));
        let count = store.reload().await;

        assert_that!(count, eq(1));
        assert_that!(store.is_locale_supported("fr"), eq(false));
        assert_that!(store.resolve("responses.hello", "en"), eq("Hi"));
    }

    #[tokio::test]
    async fn snapshot_taken_before_reload_is_unchanged() {
        let dir = TempDir::new().unwrap();
        write_locale(dir.path(), "en", &json!({ "responses": { "hello": "Hello" } }));

        let store = locale_store(dir.path());
        store.load().await;
        let before = store.snapshot();

        write_locale(dir.path(), "en", &json!({ "responses": { "hello": "Hi" } }));
        write_locale(dir.path(), "fr", &json!({}));
        store.reload().await;

        assert_that!(before.resolve("responses.hello", "en"), eq("Hello"));
        assert_that!(before.contains("fr"), eq(false));
        assert_that!(store.snapshot().resolve("responses.hello", "en"), eq("Hi"));
    }

    #[googletest::test]
    fn replace_enforces_default_locale() {
        let store = locale_store(Path::new("/nonexistent"));

        let count = store.replace(HashMap::from([("fr".to_string(), LocaleTree::empty())]));

        expect_that!(count, eq(2));
        expect_that!(store.available_locales(), elements_are![eq("en"), eq("fr")]);
    }

    #[rstest]
    #[case::invalid_json("{", "Failed to parse locale file")]
    #[case::empty("  ", "is empty")]
    #[case::not_object("\"en\"", "root must be an object")]
    #[case::bad_section(r#"{"commands": 1}"#, "section 'commands' must be an object")]
    fn parse_locale_document_reports_failures(#[case] content: &str, #[case] message: &str) {
        let result = parse_locale_document(Path::new("xx.json"), content);

        assert_that!(result, err(displays_as(contains_substring(message))));
    }
}
