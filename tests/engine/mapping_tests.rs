//! Mapping tests.

use slpworld_engine::{Mapper, MappingRule, SkipReason, SlpNode, map_to_slp};
use slpworld_world::{POSITION_VERB, WorldEntity, WorldModel, WorldRelation, extract};

fn graph_for(text: &str) -> slpworld_engine::SlpGraph {
    let parsed = slpworld_parser::parse(text).unwrap();
    map_to_slp(&extract(&parsed).unwrap()).unwrap()
}

#[test]
fn one_node_per_entity() {
    let graph = graph_for("Two dogs are running. The dog is on the rug.");
    assert_eq!(graph.names().collect::<Vec<_>>(), vec!["Dog", "Rug"]);
}

#[test]
fn red_ball_scene_nodes() {
    let graph = graph_for("A red ball is on the table.");
    assert_eq!(
        graph.get("Ball"),
        Some(
            &SlpNode::new("Ball")
                .with_attribute("color", "red")
                .with_position("on(Table)")
        )
    );
    assert_eq!(graph.get("Table"), Some(&SlpNode::new("Table")));
}

#[test]
fn spatial_only_relation_never_becomes_state() {
    let graph = graph_for("The cat is under the table.");
    let cat = graph.get("Cat").unwrap();
    assert!(cat.states.is_empty());
    assert_eq!(cat.positions, vec!["under(Table)"]);
}

#[test]
fn mapper_report_names_rules() {
    let world = WorldModel::from_parts(
        vec![WorldEntity::new("Robot"), WorldEntity::new("Box")],
        vec![
            WorldRelation::new("Robot", "carrying")
                .with_object("Box")
                .with_spatial("near"),
            WorldRelation::new("Box", POSITION_VERB).with_spatial("on"),
            WorldRelation::new("Door", "hiding"),
        ],
    );

    let mut mapper = Mapper::new();
    let graph = mapper.map(&world).unwrap();
    let report = mapper.take_report();

    let rules: Vec<_> = report.applied.iter().map(|a| a.rule).collect();
    assert_eq!(
        rules,
        vec![
            MappingRule::VerbState,
            MappingRule::SpatialModifier,
            MappingRule::SpatialOnly,
        ]
    );
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::UnknownSubject);
    assert!(!graph.contains("Door"));
    assert_eq!(graph.get("Box").unwrap().positions, vec!["on"]);
}
