//! Reader tests.

use slpworld_foundation::ErrorKind;
use slpworld_language::{emit, read};

#[test]
fn read_emitted_scene() {
    let parsed = slpworld_parser::parse("The robot is carrying a box near the door.").unwrap();
    let world = slpworld_world::extract(&parsed).unwrap();
    let graph = slpworld_engine::map_to_slp(&world).unwrap();

    let text = emit(&graph).unwrap();
    assert_eq!(read(&text).unwrap(), graph.sorted());
}

#[test]
fn read_tolerates_trailing_newline() {
    let graph = read("node Cat {\n    state: sleeping\n}\n").unwrap();
    assert_eq!(graph.len(), 1);
}

#[test]
fn read_reports_line_numbers() {
    let err = read("node Cat {\n    state: sleeping\n}\n\nnode Dog {\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Syntax { line: 5, .. }));
    assert!(err.to_string().contains("unterminated"));
}

#[test]
fn read_rejects_garbage_header() {
    let err = read("hello world").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Syntax { line: 1, .. }));
}
