//! Dotted-path resolution against loaded locale trees.
//!
//! Resolution never fails loudly: a path that cannot be resolved comes back
//! unchanged, and callers detect the miss by comparing the result with the
//! path they asked for.
//!
//! Falling back to [`DEFAULT_LOCALE`] happens only when the requested locale
//! is not loaded at all. A loaded locale that lacks a key yields a miss; the
//! default locale's value for that key is *not* used.

use super::node::LocaleTree;
use super::store::LocaleSnapshot;

/// The process-wide default locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Resolves `path` for `locale`, returning `None` on a miss.
#[must_use]
pub fn lookup<'a>(snapshot: &'a LocaleSnapshot, path: &str, locale: &str) -> Option<&'a str> {
    let tree = snapshot.tree(locale).or_else(|| snapshot.tree(DEFAULT_LOCALE))?;
    resolve_in_tree(tree, path)
}

/// Resolves `path` for `locale`, returning `path` itself on a miss.
#[must_use]
pub fn resolve(snapshot: &LocaleSnapshot, path: &str, locale: &str) -> String {
    lookup(snapshot, path, locale).map_or_else(|| path.to_string(), str::to_string)
}

/// Resolves `path` inside a single tree.
///
/// The first segment selects a section (`commands`, `responses`, `embeds`);
/// every following segment descends one level. Field names match
/// case-insensitively, keys of string-keyed maps (see [`is_string_map`])
/// match exactly. The final node must be a leaf string.
#[must_use]
pub fn resolve_in_tree<'a>(tree: &'a LocaleTree, path: &str) -> Option<&'a str> {
    let mut segments = path.split('.');
    let section = segments.next()?;
    let mut node = tree.section(section)?;
    let mut parents: Vec<&str> = Vec::new();

    for segment in segments {
        node = if is_string_map(section, &parents) {
            node.child_exact(segment)?
        } else {
            node.child(segment)?
        };
        parents.push(segment);
    }

    node.as_leaf()
}

/// Whether the node reached by `parents` under `section` is keyed by
/// arbitrary strings rather than fixed field names.
///
/// These are `embeds.colors`, `responses.language.names`, and the
/// `options`/`subcommands` maps of a command.
fn is_string_map(section: &str, parents: &[&str]) -> bool {
    let is = |segment: &&str, name: &str| segment.eq_ignore_ascii_case(name);
    match (section, parents) {
        ("embeds", [colors]) => is(colors, "colors"),
        ("responses", [language, names]) => is(language, "language") && is(names, "names"),
        ("commands", [.., last]) => is(last, "options") || is(last, "subcommands"),
        _ => false,
    }
}

/// Returns true if `resolved` is the miss sentinel for `path`.
#[must_use]
pub fn is_miss(resolved: &str, path: &str) -> bool {
    resolved == path
}
