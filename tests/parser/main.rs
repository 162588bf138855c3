//! Integration tests for the slpworld_parser crate.
//!
//! Tests for the lexical parsing stage:
//! - Sentence splitting and tokenization
//! - Vocabulary classification
//! - Full parser pipeline, including pronoun carry-over

mod parser_tests;
mod tokenizer_tests;
mod vocabulary_tests;
