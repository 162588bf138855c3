//! Whole-pipeline properties.

use proptest::prelude::*;
use slpworld::language::read;
use slpworld::{Interpreter, interpret};

fn word() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("the"),
        Just("two"),
        Just("blue"),
        Just("ball"),
        Just("cats"),
        Just("rug"),
        Just("chair"),
        Just("it"),
        Just("is"),
        Just("watching"),
        Just("hiding"),
        Just("in"),
        Just("behind"),
        Just("next"),
        Just("to"),
    ]
}

fn text() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::collection::vec(word(), 1..7), 1..5).prop_map(|s| {
        s.iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join(". ")
    })
}

fn headers(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter_map(|l| l.strip_prefix("node ")?.strip_suffix(" {"))
        .collect()
}

proptest! {
    #[test]
    fn output_is_deterministic(text in text()) {
        let first = interpret(&text).unwrap();
        prop_assert_eq!(&first, &interpret(&text).unwrap());
        prop_assert_eq!(&first, &Interpreter::new().interpret(&text).unwrap());
    }

    #[test]
    fn headers_are_sorted_and_unique(text in text()) {
        let output = interpret(&text).unwrap();
        let names = headers(&output);
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(names, sorted);
    }

    #[test]
    fn descriptor_groups_are_sorted(text in text()) {
        let output = interpret(&text).unwrap();
        for block in output.split("\n\n") {
            for prefix in ["    state: ", "    position: ", "    closure: "] {
                let group: Vec<&str> = block.lines().filter(|l| l.starts_with(prefix)).collect();
                let mut sorted = group.clone();
                sorted.sort_unstable();
                prop_assert_eq!(group, sorted);
            }
            prop_assert!(!block.contains("closure: "));
        }
    }

    #[test]
    fn every_mapped_graph_reads_back(text in text()) {
        let mut interpreter = Interpreter::new();
        let graph = interpreter.interpret_graph(&text).unwrap();
        let output = interpreter.interpret(&text).unwrap();
        prop_assert_eq!(read(&output).unwrap(), graph.sorted());
    }
}
