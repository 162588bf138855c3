//! Main parser pipeline.
//!
//! Orchestrates sentence splitting, vocabulary lookup, pronoun resolution,
//! adjective attachment and relation extraction.

use slpworld_foundation::{Error, ErrorContext, Result, capitalize, singularize};

use crate::pronouns::PronounState;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{AdjectiveClass, POSITION_VERB, Vocabulary, WordClass};
use crate::world::{ParsedWorld, Relation};

/// Parses text with a fresh parser.
///
/// # Errors
///
/// Only internal invariant violations are reported; every string input,
/// including the empty string, parses.
pub fn parse(text: &str) -> Result<ParsedWorld> {
    LexicalParser::new(Vocabulary::standard()).parse(text)
}

/// What one sentence contributes, before it is applied to the world.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SentenceAnalysis {
    /// Entity names in token order, pronoun referent last
    pub names: Vec<String>,
    /// Adjectives in token order
    pub adjectives: Vec<(AdjectiveClass, String)>,
    /// First matched verb
    pub verb: Option<&'static str>,
    /// First matched spatial preposition
    pub spatial: Option<&'static str>,
}

impl SentenceAnalysis {
    /// The relation this sentence yields, if any.
    #[must_use]
    pub fn relation(&self) -> Option<Relation> {
        let first = self.names.first().cloned();
        let second = self.names.get(1).cloned();

        if let Some(verb) = self.verb {
            Some(Relation::new(
                first,
                verb,
                second,
                self.spatial.map(str::to_string),
            ))
        } else if let (Some(spatial), Some(first)) = (self.spatial, first) {
            Some(Relation::new(
                Some(first),
                POSITION_VERB,
                second,
                Some(spatial.to_string()),
            ))
        } else {
            None
        }
    }
}

/// The lexical parser.
///
/// Holds the pronoun slot for the text being parsed; the slot is cleared at
/// the start of every [`LexicalParser::parse`] call.
#[derive(Clone, Debug, Default)]
pub struct LexicalParser {
    vocabulary: Vocabulary,
    pronoun_state: PronounState,
}

impl LexicalParser {
    /// Creates a new parser with the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            pronoun_state: PronounState::new(),
        }
    }

    /// Returns the pronoun state.
    #[must_use]
    pub fn pronoun_state(&self) -> &PronounState {
        &self.pronoun_state
    }

    /// Parses text into a [`ParsedWorld`].
    ///
    /// # Errors
    ///
    /// Returns an internal error if an analysed name was never registered.
    pub fn parse(&mut self, text: &str) -> Result<ParsedWorld> {
        self.pronoun_state.clear();
        let mut world = ParsedWorld::new();
        let sentences = InputTokenizer::sentences(text);

        for (position, sentence) in sentences.iter().enumerate() {
            let analysis = self.analyze(sentence, &mut world);
            self.apply(&analysis, &mut world).map_err(|e| {
                e.with_context(
                    ErrorContext::new()
                        .with_stage("parse")
                        .with_position(position)
                        .with_fragment(*sentence),
                )
            })?;
        }

        tracing::debug!(
            sentences = sentences.len(),
            entities = world.entities().len(),
            relations = world.relations().len(),
            "parsed text"
        );

        Ok(world)
    }

    /// Analyses one sentence, registering new entity names as they appear.
    pub fn analyze(&mut self, sentence: &str, world: &mut ParsedWorld) -> SentenceAnalysis {
        let words = InputTokenizer::tokenize(sentence);
        let mut analysis = SentenceAnalysis::default();

        let mut i = 0;
        while let Some(&word) = words.get(i) {
            let (class, width) = self.vocabulary.classify(word, words.get(i + 1).copied());
            match class {
                WordClass::Stopword => {}
                WordClass::Adjective(adjective) => {
                    analysis
                        .adjectives
                        .push((adjective, word.to_ascii_lowercase()));
                }
                WordClass::Verb(verb) => {
                    analysis.verb.get_or_insert(verb);
                }
                WordClass::Spatial(spatial) => {
                    analysis.spatial.get_or_insert(spatial);
                }
                WordClass::Noun => {
                    let name = capitalize(singularize(word));
                    if !name.is_empty() {
                        if world.register(&name) {
                            tracing::trace!(entity = %name, "registered entity");
                        }
                        analysis.names.push(name);
                    }
                }
            }
            i += width;
        }

        if let Some(referent) = self.pronoun_state.resolve(sentence) {
            analysis.names.push(referent.to_string());
        }

        if let Some(last) = analysis.names.last() {
            self.pronoun_state.set_it(last.clone());
        }

        analysis
    }

    /// Attaches adjectives and records the sentence relation.
    fn apply(&self, analysis: &SentenceAnalysis, world: &mut ParsedWorld) -> Result<()> {
        if let Some(first) = analysis.names.first() {
            if !analysis.adjectives.is_empty() {
                let entity = world
                    .entity_mut(first)
                    .ok_or_else(|| Error::internal(format!("entity {first} was never registered")))?;
                for (class, adjective) in &analysis.adjectives {
                    entity
                        .attributes
                        .insert(class.attribute_key().to_string(), adjective.clone());
                }
            }
        }

        if let Some(relation) = analysis.relation() {
            tracing::trace!(verb = %relation.verb, subject = ?relation.subject, "relation");
            world.push_relation(relation);
        }

        Ok(())
    }
}
