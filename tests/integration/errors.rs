//! Error surface tests.

use std::error::Error as _;

use slpworld::runtime::InterpretError;
use slpworld::{Interpreter, interpret};

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(interpret(""), Err(InterpretError::InvalidInput(_))));
    assert!(matches!(
        interpret(" \n\t  "),
        Err(InterpretError::InvalidInput(_))
    ));
}

#[test]
fn invalid_input_is_not_retryable() {
    let err = interpret("").unwrap_err();
    assert_eq!(err.kind(), "invalid-input");
    assert!(!err.is_retryable());
    assert!(err.source().is_none());
}

#[test]
fn punctuation_only_input_is_valid_and_empty() {
    assert_eq!(interpret("?!.").unwrap(), "");
}

#[test]
fn interpreter_recovers_after_rejection() {
    let mut interpreter = Interpreter::new();
    assert!(interpreter.interpret("").is_err());
    assert_eq!(
        interpreter.interpret("Two dogs are running.").unwrap(),
        "node Dog {\n    state: running\n}"
    );
}
