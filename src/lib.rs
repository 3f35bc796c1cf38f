//! # itemfilter
//!
//! An error-tolerant parser for item filter files.
//!
//! The parsing pipeline lives in the [filter] module: a line tokenizer, a keyword
//! driven rule matcher, and a document builder that regroups rules into blocks.

pub mod filter;

pub use filter::{parse, parse_reader, parse_rules, FilterError, ParsedDocument, Rule, RuleBlock};
