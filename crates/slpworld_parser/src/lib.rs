//! Lexical parser for scene descriptions.
//!
//! This crate transforms sentences like "A red ball is on the table." into
//! loosely-typed entities and relations that the canonicalizer consumes.
//!
//! # Architecture
//!
//! ```text
//! "A red ball is on the table. It is broken."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SENTENCE SPLIT  │  → ["A red ball is on the table", "It is broken"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["A", "red", "ball", "is", "on", "the", "table"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → [Stop, Adj(color), Noun, Stop, Spatial(on), Stop, Noun]
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PRONOUN SLOT    │  → "it" resolves to the last entity of a prior sentence
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PARSED WORLD    │  → Ball {color: red}, Table, Relation(Ball position Table on)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Sentence splitting and word tokens
//! - [`vocabulary`] - Fixed adjective, verb, spatial and stopword tables
//! - [`pronouns`] - Single-slot pronoun state
//! - [`world`] - `ParsedWorld`, `Entity`, `Relation`
//! - [`parser`] - Main parser pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parser;
pub mod pronouns;
pub mod tokenizer;
pub mod vocabulary;
pub mod world;

pub use parser::{LexicalParser, parse};
pub use vocabulary::{AdjectiveClass, POSITION_VERB, Vocabulary, WordClass};
pub use world::{Entity, ParsedWorld, Relation};
