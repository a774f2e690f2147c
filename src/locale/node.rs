//! Locale tree data model.
//!
//! A locale document is parsed into a [`LocaleTree`]: three fixed sections
//! (`commands`, `responses`, `embeds`), each holding a tree of [`Node`]s.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Section names in the order they appear in a locale document.
pub const SECTIONS: [&str; 3] = ["commands", "responses", "embeds"];

/// A single node in a locale tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Named children (nested feature objects, option maps, colour maps...).
    Object(BTreeMap<String, Node>),
    /// Positional children, addressed by decimal index segments.
    List(Vec<Node>),
    /// A translated string.
    Leaf(String),
}

impl Default for Node {
    fn default() -> Self {
        Self::Object(BTreeMap::new())
    }
}

impl Node {
    /// Converts a JSON value into a node.
    ///
    /// Numbers and booleans become leaves holding their JSON text.
    /// Returns `None` for `null`; null members are dropped from their parent.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Leaf(s.clone())),
            Value::Bool(_) | Value::Number(_) => Some(Self::Leaf(value.to_string())),
            Value::Array(items) => Some(Self::List(items.iter().filter_map(Self::from_json).collect())),
            Value::Object(map) => Some(Self::Object(
                map.iter()
                    .filter_map(|(key, value)| Self::from_json(value).map(|node| (key.clone(), node)))
                    .collect(),
            )),
        }
    }

    /// Descends one path segment.
    ///
    /// Objects match the exact key first, then fall back to an ASCII
    /// case-insensitive match. Lists take a decimal index. Leaves have no
    /// children.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Object(children) => self.child_exact(segment).or_else(|| {
                children
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(segment))
                    .map(|(_, node)| node)
            }),
            Self::List(_) | Self::Leaf(_) => self.child_exact(segment),
        }
    }

    /// Like [`Node::child`], without the case-insensitive fallback.
    #[must_use]
    pub fn child_exact(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Object(children) => children.get(segment),
            Self::List(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the string if this node is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Object(_) | Self::List(_) => None,
        }
    }

    /// Flattens this node into a dot-separated key map.
    ///
    /// List elements use their index as the segment (`items.0`), so every
    /// returned key is resolvable by the path resolver.
    #[must_use]
    pub fn flatten(&self, prefix: Option<&str>) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        self.flatten_into(prefix, &mut result);
        result
    }

    /// Recursive worker for [`Node::flatten`].
    fn flatten_into(&self, prefix: Option<&str>, result: &mut BTreeMap<String, String>) {
        let join = |segment: &str| prefix.map_or_else(|| segment.to_string(), |p| format!("{p}.{segment}"));

        match self {
            Self::Object(children) => {
                for (key, child) in children {
                    child.flatten_into(Some(&join(key.as_str())), result);
                }
            }
            Self::List(items) => {
                for (index, child) in items.iter().enumerate() {
                    child.flatten_into(Some(&join(&index.to_string())), result);
                }
            }
            Self::Leaf(value) => {
                if let Some(key) = prefix {
                    result.insert(key.to_string(), value.clone());
                }
            }
        }
    }
}

/// Structural problems in a locale document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The document root is not an object.
    #[error("the document root must be an object")]
    NotAnObject,
    /// A fixed section holds something other than an object.
    #[error("section '{0}' must be an object")]
    InvalidSection(&'static str),
}

/// The parsed content of one locale document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTree {
    /// `commands` section: command names, descriptions, options, subcommands.
    commands: Node,
    /// `responses` section: message templates.
    responses: Node,
    /// `embeds` section: colours and footer.
    embeds: Node,
}

impl LocaleTree {
    /// An empty tree (every section is an empty object).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a tree from a parsed locale document.
    ///
    /// Section names are matched case-insensitively; missing sections are
    /// empty and unknown top-level members are ignored.
    ///
    /// # Errors
    /// - the root is not an object
    /// - a section is present but is not an object
    pub fn from_json(document: &Value) -> Result<Self, SchemaError> {
        let Value::Object(root) = document else {
            return Err(SchemaError::NotAnObject);
        };

        let mut tree = Self::empty();
        for (key, value) in root {
            let Some(section) = SECTIONS.iter().find(|name| key.eq_ignore_ascii_case(name)) else {
                tracing::debug!(member = %key, "Ignoring unknown top-level member");
                continue;
            };

            let node = match value {
                Value::Null => Node::default(),
                Value::Object(_) => Node::from_json(value).unwrap_or_default(),
                _ => return Err(SchemaError::InvalidSection(*section)),
            };

            match *section {
                "commands" => tree.commands = node,
                "responses" => tree.responses = node,
                _ => tree.embeds = node,
            }
        }

        Ok(tree)
    }

    /// Selects a section by its exact (lowercase) name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Node> {
        match name {
            "commands" => Some(&self.commands),
            "responses" => Some(&self.responses),
            "embeds" => Some(&self.embeds),
            _ => None,
        }
    }

    /// Every leaf in the tree as full dot-separated paths (`responses.errors.general`).
    #[must_use]
    pub fn flatten(&self) -> BTreeMap<String, String> {
        SECTIONS
            .iter()
            .filter_map(|name| self.section(name).map(|node| node.flatten(Some(*name))))
            .flatten()
            .collect()
    }
}
