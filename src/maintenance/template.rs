//! Skeleton documents for starting a new locale.

use std::fmt::Write as _;

use super::catalog::reference_catalog;
use crate::locale::{
    LocaleSnapshot,
    LocaleStore,
};

/// One level of the generated document, in insertion order.
#[derive(Debug)]
enum TemplateNode {
    /// A translated value.
    Leaf(String),
    /// Named children.
    Branch(Vec<(String, TemplateNode)>),
}

impl TemplateNode {
    /// Inserts `value` at `segments`, creating branches on the way.
    ///
    /// Keys already holding a leaf are left alone.
    fn insert(&mut self, segments: &[&str], value: &str) {
        let Self::Branch(children) = self else {
            return;
        };
        let Some((first, rest)) = segments.split_first() else {
            return;
        };

        let position = children.iter().position(|(key, _)| key == first);
        if rest.is_empty() {
            if position.is_none() {
                children.push(((*first).to_string(), Self::Leaf(value.to_string())));
            }
            return;
        }

        let index = position.unwrap_or_else(|| {
            children.push(((*first).to_string(), Self::Branch(Vec::new())));
            children.len() - 1
        });
        if let Some((_, child)) = children.get_mut(index) {
            child.insert(rest, value);
        }
    }

    /// Writes this node as JSON at the given indentation depth.
    fn render(&self, depth: usize, output: &mut String) {
        match self {
            Self::Leaf(value) => {
                let _ = write!(output, "\"{}\"", escape_json_string(value));
            }
            Self::Branch(children) if children.is_empty() => output.push_str("{}"),
            Self::Branch(children) => {
                let indent = "  ".repeat(depth + 1);
                output.push_str("{\n");
                for (index, (key, child)) in children.iter().enumerate() {
                    let _ = write!(output, "{indent}\"{}\": ", escape_json_string(key));
                    child.render(depth + 1, output);
                    if index + 1 < children.len() {
                        output.push(',');
                    }
                    output.push('\n');
                }
                let _ = write!(output, "{}}}", "  ".repeat(depth));
            }
        }
    }
}

/// Builds a skeleton locale document from a base locale.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    /// Keys to include, as full paths.
    catalog: Vec<String>,
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new(reference_catalog())
    }
}

impl TemplateGenerator {
    #[must_use]
    pub const fn new(catalog: Vec<String>) -> Self {
        Self { catalog }
    }

    /// Generates a template from the store's current snapshot.
    #[must_use]
    pub fn generate(&self, store: &LocaleStore, base_locale: &str) -> String {
        self.generate_from_snapshot(&store.snapshot(), base_locale)
    }

    /// Generates a template from `snapshot`.
    ///
    /// Every catalog key that resolves in `base_locale` is written with its
    /// base value, nested under its section and grouped by path. The output
    /// starts with `//` comments and is therefore JSONC, which the locale
    /// loader accepts as-is.
    #[must_use]
    pub fn generate_from_snapshot(&self, snapshot: &LocaleSnapshot, base_locale: &str) -> String {
        let mut root = TemplateNode::Branch(Vec::new());
        let mut included = 0_usize;

        for key in &self.catalog {
            if let Some(value) = snapshot.lookup(key, base_locale) {
                let segments: Vec<&str> = key.split('.').collect();
                root.insert(&segments, value);
                included += 1;
            }
        }

        tracing::debug!(base_locale, included, "Generated language template");

        let mut output = String::new();
        let _ = writeln!(output, "// Language template based on '{base_locale}'");
        output.push_str("// Replace all values with translations for your target language\n\n");
        root.render(0, &mut output);
        output.push('\n');
        output
    }
}

/// Escapes `input` for use inside a JSON string literal.
#[must_use]
pub fn escape_json_string(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\u{:04x}", u32::from(c));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
