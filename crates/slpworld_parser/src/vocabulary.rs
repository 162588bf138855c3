//! Fixed vocabulary tables.
//!
//! The vocabularies are closed and small, so they are plain static
//! lookups rather than a runtime registry.

/// Verb marker used for relations that only carry a spatial cue.
pub const POSITION_VERB: &str = "position";

/// Words never treated as entity candidates.
pub const STOPWORDS: &[&str] = &["is", "are", "the", "a", "an", "it"];

/// Counting and quantifying words, discarded like stopwords.
pub const QUANTIFIERS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "some",
    "many", "several", "few", "all", "every", "each", "both",
];

/// Recognized adjectives.
pub const ADJECTIVES: &[&str] = &[
    "red", "blue", "green", "large", "small", "broken", "open", "closed",
];

/// Adjectives that set the `color` attribute; the rest set `state`.
pub const COLOR_ADJECTIVES: &[&str] = &["red", "blue", "green"];

/// Recognized verbs.
pub const VERBS: &[&str] = &[
    "watching", "carrying", "holding", "hiding", "running", "boiling",
];

/// Recognized spatial prepositions. `next to` spans two tokens.
pub const SPATIALS: &[&str] = &["on", "under", "in", "near", "behind", "next to"];

/// The attribute an adjective sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdjectiveClass {
    /// red, blue, green
    Color,
    /// every other adjective
    State,
}

impl AdjectiveClass {
    /// Attribute key written on the entity.
    #[must_use]
    pub fn attribute_key(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::State => "state",
        }
    }
}

/// Classification of a single word (or the `next to` pair).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordClass {
    /// Dropped stopword or quantifier
    Stopword,
    /// Adjective with the attribute it sets
    Adjective(AdjectiveClass),
    /// Relation verb
    Verb(&'static str),
    /// Spatial preposition
    Spatial(&'static str),
    /// Anything else: an entity candidate
    Noun,
}

/// Lookup front-end over the static tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vocabulary;

impl Vocabulary {
    /// Returns the standard vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self
    }

    /// Returns true for stopwords and quantifiers (case-insensitive).
    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        let lower = word.to_ascii_lowercase();
        STOPWORDS.contains(&lower.as_str()) || QUANTIFIERS.contains(&lower.as_str())
    }

    /// Looks up an adjective (case-insensitive).
    #[must_use]
    pub fn lookup_adjective(&self, word: &str) -> Option<AdjectiveClass> {
        let lower = word.to_ascii_lowercase();
        if !ADJECTIVES.contains(&lower.as_str()) {
            None
        } else if COLOR_ADJECTIVES.contains(&lower.as_str()) {
            Some(AdjectiveClass::Color)
        } else {
            Some(AdjectiveClass::State)
        }
    }

    /// Looks up a verb (case-insensitive), returning its table entry.
    #[must_use]
    pub fn lookup_verb(&self, word: &str) -> Option<&'static str> {
        let lower = word.to_ascii_lowercase();
        VERBS.iter().copied().find(|v| *v == lower)
    }

    /// Looks up a spatial preposition starting at `word`.
    ///
    /// `next` only matches when followed by `to`. Returns the table entry
    /// and the number of tokens it consumes.
    #[must_use]
    pub fn lookup_spatial(
        &self,
        word: &str,
        following: Option<&str>,
    ) -> Option<(&'static str, usize)> {
        let lower = word.to_ascii_lowercase();
        if lower == "next" {
            return following
                .filter(|f| f.eq_ignore_ascii_case("to"))
                .map(|_| ("next to", 2));
        }
        SPATIALS
            .iter()
            .copied()
            .find(|s| *s == lower)
            .map(|s| (s, 1))
    }

    /// Classifies `word`, returning the class and tokens consumed.
    ///
    /// `following` is the next word of the sentence, if any.
    #[must_use]
    pub fn classify(&self, word: &str, following: Option<&str>) -> (WordClass, usize) {
        if let Some((spatial, width)) = self.lookup_spatial(word, following) {
            return (WordClass::Spatial(spatial), width);
        }
        if self.is_stopword(word) {
            return (WordClass::Stopword, 1);
        }
        if let Some(class) = self.lookup_adjective(word) {
            return (WordClass::Adjective(class), 1);
        }
        if let Some(verb) = self.lookup_verb(word) {
            return (WordClass::Verb(verb), 1);
        }
        (WordClass::Noun, 1)
    }
}
