//! Emitter tests.

use slpworld_engine::{SlpGraph, SlpNode};
use slpworld_language::{EmitConfig, emit, emit_with_config};

fn sample() -> SlpGraph {
    [
        SlpNode::new("Robot")
            .with_state("carrying(Box)")
            .with_position("near(Box)"),
        SlpNode::new("Box").with_attribute("color", "red"),
        SlpNode::new("Door"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn emit_full_document() {
    assert_eq!(
        emit(&sample()).unwrap(),
        "node Box {\n    color: red\n}\n\n\
         node Door {\n}\n\n\
         node Robot {\n    state: carrying(Box)\n    position: near(Box)\n}"
    );
}

#[test]
fn emit_zero_indent() {
    let graph: SlpGraph = [SlpNode::new("Cat").with_position("on(Mat)")]
        .into_iter()
        .collect();
    let text = emit_with_config(&graph, &EmitConfig::new().with_indent_width(0)).unwrap();
    assert_eq!(text, "node Cat {\nposition: on(Mat)\n}");
}

#[test]
fn emit_ignores_descriptor_insertion_order() {
    let a: SlpGraph = [SlpNode::new("Dog").with_state("b").with_state("a")]
        .into_iter()
        .collect();
    let b: SlpGraph = [SlpNode::new("Dog").with_state("a").with_state("b")]
        .into_iter()
        .collect();
    assert_eq!(emit(&a).unwrap(), emit(&b).unwrap());
}
