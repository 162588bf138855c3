//! Extraction tests.

use slpworld_parser::parse;
use slpworld_world::{POSITION_VERB, WorldRelation, extract};

#[test]
fn extract_keeps_first_seen_order() {
    let model = extract(&parse("The lamp is near the sofa. A cat is on the sofa.").unwrap()).unwrap();
    let names: Vec<_> = model.entities().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Lamp", "Sofa", "Cat"]);
}

#[test]
fn extract_normalizes_relations() {
    let model = extract(&parse("The lamp is next to the sofa.").unwrap()).unwrap();
    assert_eq!(
        model.relations(),
        &[WorldRelation::new("Lamp", POSITION_VERB)
            .with_object("Sofa")
            .with_spatial("next_to")]
    );
}

#[test]
fn extract_copies_attributes() {
    let model = extract(&parse("A broken green box is here.").unwrap()).unwrap();
    let box_ = model.entity("Box").unwrap();
    assert_eq!(box_.attributes.get("color").map(String::as_str), Some("green"));
    assert_eq!(box_.attributes.get("state").map(String::as_str), Some("broken"));
}

#[test]
fn extract_empty_world() {
    let model = extract(&parse("").unwrap()).unwrap();
    assert!(model.entities().is_empty());
    assert!(model.relations().is_empty());
}
