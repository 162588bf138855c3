//! Pronoun tracking state.
//!
//! Only "it" is tracked, and only as a single slot holding the most
//! recently introduced entity name. There is no discourse history.

/// State for pronoun resolution across sentences.
#[derive(Clone, Debug, Default)]
pub struct PronounState {
    /// "it" referent: last entity name of the previous sentence that had one
    it: Option<String>,
}

impl PronounState {
    /// Creates a new pronoun state with no referent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the "it" referent.
    pub fn set_it(&mut self, name: impl Into<String>) {
        self.it = Some(name.into());
    }

    /// Gets the "it" referent.
    #[must_use]
    pub fn get_it(&self) -> Option<&str> {
        self.it.as_deref()
    }

    /// Resolves "it" for a sentence.
    ///
    /// Matches whenever the lowercased sentence contains `it` anywhere,
    /// including inside other words ("sitting", "kitchen").
    #[must_use]
    pub fn resolve(&self, sentence: &str) -> Option<&str> {
        if sentence.to_ascii_lowercase().contains("it") {
            self.get_it()
        } else {
            None
        }
    }

    /// Clears the referent.
    pub fn clear(&mut self) {
        self.it = None;
    }
}
