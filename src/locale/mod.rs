//! Locale documents: parsing, loading and path resolution.
mod error;
mod node;
mod resolver;
mod store;

pub use error::LoadError;
pub use node::{
    LocaleTree,
    Node,
    SECTIONS,
    SchemaError,
};
pub use resolver::{
    DEFAULT_LOCALE,
    is_miss,
    lookup,
    resolve,
    resolve_in_tree,
};
pub use store::{
    LocaleSnapshot,
    LocaleStore,
    parse_locale_document,
};
