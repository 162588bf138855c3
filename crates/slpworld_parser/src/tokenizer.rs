//! Input tokenization.
//!
//! Splits raw text into sentences and sentences into words.

/// Splits text into sentences and tokenizes them.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits text on `.`, `?` and `!`.
    ///
    /// Each sentence is trimmed; empty sentences are dropped.
    #[must_use]
    pub fn sentences(text: &str) -> Vec<&str> {
        text.split(['.', '?', '!'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Tokenizes a sentence into words.
    ///
    /// - Cuts the sentence into runs of word characters (letters, digits, `_`)
    /// - Keeps only runs made entirely of ASCII letters, so `robot2`,
    ///   `big_box` and `café` yield nothing
    /// - Preserves case (classification lowercases on lookup)
    #[must_use]
    pub fn tokenize(sentence: &str) -> Vec<&str> {
        sentence
            .split(|c: char| !is_word_char(c))
            .filter(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_alphabetic()))
            .collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
