//! User language preferences and their persistence.
mod error;
mod persistence;
mod store;
mod types;

pub use error::PersistenceError;
pub use store::{
    DEFAULT_MAX_AGE,
    PreferenceStore,
};
pub use types::UserPreference;
