//! Tokenizer tests.
//!
//! Tests for splitting raw text into sentences and word tokens.

use slpworld_parser::tokenizer::InputTokenizer;

#[test]
fn sentences_split_on_terminators() {
    let sentences = InputTokenizer::sentences("A cat sleeps. Is it red? Yes!  ");
    assert_eq!(sentences, vec!["A cat sleeps", "Is it red", "Yes"]);
}

#[test]
fn sentences_drop_empty_fragments() {
    assert!(InputTokenizer::sentences("...  ?! ").is_empty());
    assert!(InputTokenizer::sentences("").is_empty());
}

#[test]
fn tokenize_preserves_case() {
    assert_eq!(InputTokenizer::tokenize("The Cat"), vec!["The", "Cat"]);
}

#[test]
fn tokenize_splits_on_non_letters() {
    assert_eq!(
        InputTokenizer::tokenize("red-ball, 42 boxes;table"),
        vec!["red", "ball", "boxes", "table"]
    );
}

#[test]
fn tokenize_skips_words_joined_to_digits() {
    assert_eq!(
        InputTokenizer::tokenize("robot2 is near the door"),
        vec!["is", "near", "the", "door"]
    );
}
