//! Per-user locale overrides.

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;
use std::time::Duration;

use chrono::{
    DateTime,
    TimeDelta,
    Utc,
};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::persistence;
use super::types::UserPreference;

/// Default age after which an untouched preference is removed.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Maps user ids to locale overrides, persisted as one JSON document.
///
/// The in-memory map is authoritative. Every mutation rewrites the whole
/// document while still holding the map lock, so mutations and writes are
/// totally ordered. Write failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct PreferenceStore {
    /// Preference document location.
    path: PathBuf,
    /// Current entries.
    preferences: Mutex<HashMap<u64, UserPreference>>,
}

impl PreferenceStore {
    /// Opens the store, loading `path` if it exists.
    ///
    /// An unreadable or corrupt document is logged and the store starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let preferences = match persistence::read_document(&path).await {
            Ok(preferences) => {
                tracing::info!("Loaded {} user preferences", preferences.len());
                preferences
            }
            Err(error) => {
                tracing::error!("Error loading user preferences: {error}");
                HashMap::new()
            }
        };

        Self { path, preferences: Mutex::new(preferences) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The user's override, if one is recorded.
    pub async fn get_user_locale(&self, user_id: u64) -> Option<String> {
        self.preferences.lock().await.get(&user_id).map(|p| p.locale.clone())
    }

    pub async fn get_user_preference(&self, user_id: u64) -> Option<UserPreference> {
        self.preferences.lock().await.get(&user_id).cloned()
    }

    /// Records `locale` for the user and persists.
    ///
    /// The locale is stored as given; checking that it is supported is up to
    /// the caller.
    pub async fn set_user_locale(&self, user_id: u64, locale: &str, username: &str) {
        let mut preferences = self.preferences.lock().await;
        preferences.insert(user_id, UserPreference::new(locale, username, Utc::now()));
        tracing::info!("Set language preference for user {username} ({user_id}): {locale}");

        self.persist(&preferences).await;
    }

    /// Deletes the user's override. Persists only if an entry was removed.
    pub async fn remove_user_preferences(&self, user_id: u64) -> bool {
        let mut preferences = self.preferences.lock().await;
        if preferences.remove(&user_id).is_none() {
            return false;
        }

        tracing::info!("Removed language preference for user {user_id}");
        self.persist(&preferences).await;
        true
    }

    /// Removes entries not updated within `max_age`.
    ///
    /// Returns the number of removed entries.
    pub async fn cleanup_old_preferences(&self, max_age: Duration) -> usize {
        self.cleanup_old_preferences_at(Utc::now(), max_age).await
    }

    /// Removes entries last updated strictly before `now - max_age`.
    ///
    /// Persists once if anything was removed.
    pub async fn cleanup_old_preferences_at(&self, now: DateTime<Utc>, max_age: Duration) -> usize {
        let Some(cutoff) = TimeDelta::from_std(max_age).ok().and_then(|age| now.checked_sub_signed(age))
        else {
            return 0;
        };

        let mut preferences = self.preferences.lock().await;
        let before = preferences.len();
        preferences.retain(|_, preference| preference.last_updated >= cutoff);
        let removed = before - preferences.len();

        if removed > 0 {
            tracing::info!("Cleaned up {removed} old user preferences");
            self.persist(&preferences).await;
        }

        removed
    }

    /// A copy of every entry, ordered by user id.
    pub async fn all_preferences(&self) -> BTreeMap<u64, UserPreference> {
        self.preferences.lock().await.iter().map(|(id, p)| (*id, p.clone())).collect()
    }

    /// Number of users per chosen locale.
    pub async fn language_stats(&self) -> BTreeMap<String, usize> {
        let preferences = self.preferences.lock().await;
        let mut stats = BTreeMap::new();
        for preference in preferences.values() {
            *stats.entry(preference.locale.clone()).or_insert(0) += 1;
        }
        stats
    }

    pub async fn len(&self) -> usize {
        self.preferences.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.preferences.lock().await.is_empty()
    }

    /// Runs [`PreferenceStore::cleanup_old_preferences`] every `every`.
    ///
    /// The first sweep happens one full interval after spawning.
    pub fn spawn_cleanup(self: Arc<Self>, every: Duration, max_age: Duration) -> JoinHandle<()> {
        let every = every.max(Duration::from_millis(1));

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;

            loop {
                interval.tick().await;
                let removed = self.cleanup_old_preferences(max_age).await;
                tracing::debug!(removed, "Periodic preference cleanup finished");
            }
        })
    }

    /// Writes `preferences` to disk, logging failures.
    async fn persist(&self, preferences: &HashMap<u64, UserPreference>) {
        if let Err(error) = persistence::write_document(&self.path, preferences).await {
            tracing::error!("Error saving user preferences: {error}");
        }
    }
}
