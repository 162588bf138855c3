//! Vocabulary tests.
//!
//! Tests for classifying words against the fixed tables.

use slpworld_parser::{AdjectiveClass, Vocabulary, WordClass};

#[test]
fn classify_each_class() {
    let vocab = Vocabulary::standard();

    assert_eq!(vocab.classify("the", None), (WordClass::Stopword, 1));
    assert_eq!(vocab.classify("Three", None), (WordClass::Stopword, 1));
    assert_eq!(
        vocab.classify("Blue", None),
        (WordClass::Adjective(AdjectiveClass::Color), 1)
    );
    assert_eq!(
        vocab.classify("broken", None),
        (WordClass::Adjective(AdjectiveClass::State), 1)
    );
    assert_eq!(vocab.classify("holding", None), (WordClass::Verb("holding"), 1));
    assert_eq!(vocab.classify("behind", None), (WordClass::Spatial("behind"), 1));
    assert_eq!(vocab.classify("lamp", None), (WordClass::Noun, 1));
}

#[test]
fn next_to_spans_two_words() {
    let vocab = Vocabulary::standard();

    assert_eq!(
        vocab.classify("next", Some("to")),
        (WordClass::Spatial("next to"), 2)
    );
    // Without "to", "next" is an ordinary noun candidate.
    assert_eq!(vocab.classify("next", Some("door")), (WordClass::Noun, 1));
    assert_eq!(vocab.classify("next", None), (WordClass::Noun, 1));
}
