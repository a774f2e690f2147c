//! Offline maintenance over loaded locales: validation, templates, reports.
pub mod catalog;
mod report;
mod template;
mod validation;

pub use catalog::REFERENCE_CATALOG;
pub use report::generate_translation_report;
pub use template::{
    TemplateGenerator,
    escape_json_string,
};
pub use validation::{
    DEFAULT_SAMPLE_SIZE,
    ValidationEngine,
    ValidationResult,
};
