//! Word-shape helpers shared by the parser and the canonicalizer.
//!
//! Singularization is deliberately naive: exactly one trailing `s` is
//! removed, with no dictionary. `"bus"` becomes `"bu"`.

/// Strips a single trailing `s`.
#[must_use]
pub fn singularize(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}

/// Uppercases the first character and lowercases the rest.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
