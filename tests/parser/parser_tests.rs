//! Parser pipeline tests.

use slpworld_parser::{LexicalParser, POSITION_VERB, Relation, Vocabulary, parse};

fn names(text: &str) -> Vec<String> {
    parse(text)
        .unwrap()
        .entities()
        .iter()
        .map(|e| e.name.clone())
        .collect()
}

#[test]
fn entities_register_once_across_sentences() {
    assert_eq!(
        names("The dog is on the rug. The dog is running. Dogs are hiding."),
        vec!["Dog", "Rug"]
    );
}

#[test]
fn relations_keep_sentence_order() {
    let world = parse("The cat is on the mat. The dog is running.").unwrap();
    assert_eq!(
        world.relations(),
        &[
            Relation::new(
                Some("Cat".to_string()),
                POSITION_VERB,
                Some("Mat".to_string()),
                Some("on".to_string()),
            ),
            Relation::new(Some("Dog".to_string()), "running", None, None),
        ]
    );
}

#[test]
fn pronoun_refers_to_last_name_of_previous_sentence() {
    let world = parse("The dog is on the rug. It is running.").unwrap();
    let last = world.relations().last().unwrap();
    assert_eq!(last.subject.as_deref(), Some("Rug"));
    assert_eq!(last.verb, "running");
}

#[test]
fn pronoun_state_does_not_leak_between_parsers() {
    let mut first = LexicalParser::new(Vocabulary::standard());
    first.parse("The dog is here.").unwrap();
    assert_eq!(first.pronoun_state().get_it(), Some("Here"));

    let world = parse("It is running.").unwrap();
    assert!(world.entities().is_empty());
    assert!(world.relations()[0].subject.is_none());
}

#[test]
fn adjectives_without_names_are_dropped() {
    let world = parse("Red.").unwrap();
    assert!(world.is_empty());
}
