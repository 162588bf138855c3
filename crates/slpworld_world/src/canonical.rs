//! Canonicalization helpers.

use slpworld_foundation::{capitalize, singularize};

/// Attribute keys with a fixed canonical spelling.
const ATTRIBUTE_KEYS: &[(&str, &str)] = &[
    ("color", "color"),
    ("state", "state"),
    ("size", "size"),
    ("material", "material"),
];

/// Canonicalizes an entity name: trim, strip one trailing `s`, capitalize.
///
/// This is applied on top of the parser's own singularization, so a name
/// that is singular but ends in `s` loses its last letter (`Bus` → `Bu`).
#[must_use]
pub fn canonicalize_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return String::new();
    }
    capitalize(singularize(name))
}

/// Maps an attribute key to its canonical spelling. Unknown keys pass through.
#[must_use]
pub fn canonicalize_attribute_key(key: &str) -> String {
    ATTRIBUTE_KEYS
        .iter()
        .find(|(from, _)| *from == key)
        .map_or(key, |(_, to)| *to)
        .to_string()
}

/// Lowercases and trims a verb.
#[must_use]
pub fn canonicalize_verb(verb: &str) -> String {
    verb.trim().to_lowercase()
}

/// Lowercases a spatial cue and joins its words with underscores.
///
/// An empty cue becomes `None`.
#[must_use]
pub fn canonicalize_spatial(spatial: Option<&str>) -> Option<String> {
    spatial
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase().replace(' ', "_"))
}
