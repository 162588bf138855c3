//! Canonicalization tests.

use proptest::prelude::*;
use slpworld_world::canonical::{
    canonicalize_attribute_key, canonicalize_name, canonicalize_spatial, canonicalize_verb,
};

#[test]
fn names_are_trimmed_singular_capitalized() {
    assert_eq!(canonicalize_name("  tables "), "Table");
    assert_eq!(canonicalize_name("LAMP"), "Lamp");
    assert_eq!(canonicalize_name(""), "");
    assert_eq!(canonicalize_name("   "), "");
}

#[test]
fn tokens_are_lowercased() {
    assert_eq!(canonicalize_verb(" Running "), "running");
    assert_eq!(canonicalize_attribute_key("color"), "color");
    assert_eq!(canonicalize_attribute_key("texture"), "texture");
    assert_eq!(canonicalize_spatial(Some("Next To")), Some("next_to".to_string()));
    assert_eq!(canonicalize_spatial(None), None);
}

proptest! {
    #[test]
    fn canonical_names_are_fixed_points(name in "[A-Z][a-z]{0,8}[a-rt-z]") {
        prop_assert_eq!(canonicalize_name(&name), name);
    }
}
