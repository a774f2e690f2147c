//! Cross-locale coverage checks.

use std::collections::HashSet;
use std::fmt::Write as _;

use super::catalog::reference_catalog;
use crate::locale::{
    LocaleSnapshot,
    LocaleStore,
};

/// Number of missing keys listed per error by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Findings of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable summary: a verdict, the errors, then the warnings.
    #[must_use]
    pub fn report(&self) -> String {
        let mut report = String::new();

        if self.is_valid() {
            report.push_str("✅ All translations are valid!\n");
        } else {
            report.push_str("❌ Translation validation failed:\n");
            for error in &self.errors {
                let _ = writeln!(report, "  - {error}");
            }
        }

        if !self.warnings.is_empty() {
            report.push_str("\n⚠️ Warnings:\n");
            for warning in &self.warnings {
                let _ = writeln!(report, "  - {warning}");
            }
        }

        report
    }
}

/// Diffs catalog coverage across loaded locales.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    /// Keys every locale is expected to provide, as full paths.
    catalog: Vec<String>,
    /// Missing keys listed per error.
    sample_size: usize,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(reference_catalog(), DEFAULT_SAMPLE_SIZE)
    }
}

impl ValidationEngine {
    #[must_use]
    pub const fn new(catalog: Vec<String>, sample_size: usize) -> Self {
        Self { catalog, sample_size }
    }

    /// Validates the store's current snapshot.
    #[must_use]
    pub fn validate(&self, store: &LocaleStore) -> ValidationResult {
        self.validate_snapshot(&store.snapshot())
    }

    /// Validates one snapshot.
    ///
    /// - error: a locale lacks keys that some other locale provides
    /// - warning: a locale resolves a key to nothing usable (empty or a miss)
    ///
    /// Locales are visited in sorted order and keys in catalog order, so the
    /// result depends only on the snapshot.
    #[must_use]
    pub fn validate_snapshot(&self, snapshot: &LocaleSnapshot) -> ValidationResult {
        let mut result = ValidationResult::default();
        let locales = snapshot.locales();

        if locales.len() < 2 {
            result
                .warnings
                .push("Less than 2 locales found. Consider adding more language support.".to_string());
        }

        let covered: Vec<(&str, HashSet<&str>)> = locales
            .iter()
            .map(|locale| (locale.as_str(), self.covered_keys(snapshot, locale)))
            .collect();

        let all_keys: Vec<&str> = self
            .catalog
            .iter()
            .map(String::as_str)
            .filter(|key| covered.iter().any(|(_, keys)| keys.contains(key)))
            .collect();

        for (locale, keys) in &covered {
            let missing: Vec<&str> = all_keys.iter().copied().filter(|key| !keys.contains(key)).collect();
            if !missing.is_empty() {
                let sample: Vec<&str> = missing.iter().copied().take(self.sample_size).collect();
                result.errors.push(format!(
                    "Locale '{locale}' is missing {} translation keys: {}",
                    missing.len(),
                    sample.join(", ")
                ));
            }
        }

        for locale in &locales {
            for key in &all_keys {
                if !is_usable(snapshot.lookup(key, locale)) {
                    result
                        .warnings
                        .push(format!("Locale '{locale}' has empty or fallback translation for key '{key}'"));
                }
            }
        }

        tracing::debug!(
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Validated {} locales",
            locales.len()
        );
        result
    }

    /// Catalog keys that `locale` resolves to a non-empty value.
    fn covered_keys<'a>(&'a self, snapshot: &LocaleSnapshot, locale: &str) -> HashSet<&'a str> {
        self.catalog
            .iter()
            .map(String::as_str)
            .filter(|key| snapshot.lookup(key, locale).is_some_and(|value| !value.is_empty()))
            .collect()
    }
}

/// Whitespace-only values are present but still worth a warning.
fn is_usable(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use googletest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::locale::LocaleTree;

    fn catalog() -> Vec<String> {
        ["responses.a", "responses.b", "responses.c", "embeds.footer"].iter().map(ToString::to_string).collect()
    }

    fn snapshot(documents: &[(&str, serde_json::Value)]) -> LocaleSnapshot {
        LocaleSnapshot::new(
            documents
                .iter()
                .map(|(code, doc)| ((*code).to_string(), LocaleTree::from_json(doc).unwrap()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[googletest::test]
    fn complete_locales_are_valid() {
        let snapshot = snapshot(&[
            ("en", json!({ "responses": { "a": "A", "b": "B" } })),
            ("fr", json!({ "responses": { "a": "À", "b": "Bé" } })),
        ]);

        let result = ValidationEngine::new(catalog(), 5).validate_snapshot(&snapshot);

        expect_that!(result.is_valid(), eq(true));
        expect_that!(result.errors, is_empty());
        expect_that!(result.warnings, is_empty());
    }

    #[googletest::test]
    fn missing_keys_are_reported_per_locale() {
        let snapshot = snapshot(&[
            ("en", json!({ "responses": { "a": "A", "b": "B", "c": "C" }, "embeds": { "footer": "F" } })),
            ("fr", json!({ "responses": { "a": "À" } })),
        ]);

        let result = ValidationEngine::new(catalog(), 2).validate_snapshot(&snapshot);

        expect_that!(result.is_valid(), eq(false));
        expect_that!(
            result.errors,
            elements_are![eq("Locale 'fr' is missing 3 translation keys: responses.b, responses.c")]
        );
        expect_that!(
            result.warnings,
            elements_are![
                eq("Locale 'fr' has empty or fallback translation for key 'responses.b'"),
                eq("Locale 'fr' has empty or fallback translation for key 'responses.c'"),
                eq("Locale 'fr' has empty or fallback translation for key 'embeds.footer'"),
            ]
        );
    }

    #[googletest::test]
    fn whitespace_values_warn_without_missing_key_error() {
        let snapshot = snapshot(&[
            ("en", json!({ "responses": { "a": "A" } })),
            ("fr", json!({ "responses": { "a": "   " } })),
        ]);

        let result = ValidationEngine::new(vec!["responses.a".to_string()], 5).validate_snapshot(&snapshot);

        expect_that!(result.is_valid(), eq(true));
        expect_that!(result.errors, is_empty());
        expect_that!(
            result.warnings,
            elements_are![eq("Locale 'fr' has empty or fallback translation for key 'responses.a'")]
        );
    }

    #[googletest::test]
    fn empty_values_count_as_missing() {
        let snapshot = snapshot(&[
            ("en", json!({ "responses": { "a": "A" } })),
            ("fr", json!({ "responses": { "a": "" } })),
        ]);

        let result = ValidationEngine::new(vec!["responses.a".to_string()], 5).validate_snapshot(&snapshot);

        expect_that!(result.errors, elements_are![eq("Locale 'fr' is missing 1 translation keys: responses.a")]);
        expect_that!(result.warnings, len(eq(1)));
    }

    #[googletest::test]
    fn single_locale_warns() {
        let snapshot = snapshot(&[("en", json!({ "responses": { "a": "A" } }))]);

        let result = ValidationEngine::new(catalog(), 5).validate_snapshot(&snapshot);

        expect_that!(result.is_valid(), eq(true));
        expect_that!(result.warnings, elements_are![starts_with("Less than 2 locales found")]);
    }

    #[googletest::test]
    fn validate_is_idempotent() {
        let snapshot = snapshot(&[
            ("en", json!({ "responses": { "a": "A", "b": "B" } })),
            ("fr", json!({ "responses": { "b": "" } })),
            ("de", json!({})),
        ]);
        let engine = ValidationEngine::new(catalog(), 5);

        let first = engine.validate_snapshot(&snapshot);
        let second = engine.validate_snapshot(&snapshot);

        expect_that!(first, eq(&second));
        expect_that!(first.errors, len(eq(2)));
    }

    #[googletest::test]
    fn errors_follow_sorted_locale_order() {
        let snapshot = snapshot(&[
            ("fr", json!({})),
            ("en", json!({ "responses": { "a": "A" } })),
            ("de", json!({})),
        ]);

        let result = ValidationEngine::new(catalog(), 5).validate_snapshot(&snapshot);

        expect_that!(
            result.errors,
            elements_are![starts_with("Locale 'de'"), starts_with("Locale 'fr'")]
        );
    }

    #[googletest::test]
    fn report_lists_errors_and_warnings() {
        let result = ValidationResult {
            errors: vec!["missing things".to_string()],
            warnings: vec!["odd things".to_string()],
        };

        let report = result.report();

        expect_that!(report, starts_with("❌ Translation validation failed:\n  - missing things\n"));
        expect_that!(report, contains_substring("⚠️ Warnings:\n  - odd things\n"));
    }

    #[googletest::test]
    fn report_for_valid_result() {
        let report = ValidationResult::default().report();

        expect_that!(report, eq("✅ All translations are valid!\n"));
    }

    #[googletest::test]
    fn default_engine_uses_reference_catalog() {
        let snapshot = snapshot(&[
            ("en", json!({ "responses": { "errors": { "general": "Error: {0}" } } })),
            ("fr", json!({})),
        ]);

        let result = ValidationEngine::default().validate_snapshot(&snapshot);

        expect_that!(
            result.errors,
            elements_are![eq("Locale 'fr' is missing 1 translation keys: responses.errors.general")]
        );
    }
}
