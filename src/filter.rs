//! Main module for item filter parsing
//!
//! Parsing happens in three stages:
//!     1. [lexer]: one line at a time is split into lexemes. The tokenizer knows nothing
//!        about keywords, `Show` and `AreaLevel` are both plain `String` tokens here.
//!     2. [parser]: the rule matcher reads exactly one line per call and turns it into a
//!        [Rule]. Malformed lines become `ParseError` rules, commented rules become
//!        `Disabled` rules.
//!     3. [building]: the flat rule list is regrouped into blocks, each opened by a
//!        `Show` or `Hide` directive (or a commented-out one).
//!
//! Callers that only need rules can drive [RuleMatcher] directly, it is an iterator and
//! can be consumed rule by rule while the input is still being read.

pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

use std::io::BufRead;

pub use ast::{
    Action, Category, Comparison, Criterion, CriterionValue, FilterKind, ParseError,
    ParsedDocument, Rule, RuleBlock, RuleKind, Visibility,
};
pub use building::build_document;
pub use error::FilterError;
pub use lexer::{LineSource, ReaderLines, StrLines};
pub use parser::RuleMatcher;

/// Parse a whole filter held in memory.
pub fn parse(text: &str) -> Result<ParsedDocument, FilterError> {
    build_document(parse_rules(text))
}

/// Parse every line of `text` into a rule, without grouping them into blocks.
pub fn parse_rules(text: &str) -> Vec<Rule> {
    RuleMatcher::for_text(text).collect()
}

/// Parse a filter from any buffered reader.
///
/// An I/O error stops the parse and is returned instead of a partial document.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ParsedDocument, FilterError> {
    let mut matcher = RuleMatcher::new(ReaderLines::new(reader));
    let rules: Vec<Rule> = matcher.by_ref().collect();
    if let Some(err) = matcher.take_error() {
        return Err(FilterError::Io(err));
    }
    build_document(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_and_parse_reader_agree() {
        let source = "Show # Uniques\n    Rarity Unique\n    SetFontSize 45\n\nHide\n";
        let from_text = parse(source).expect("parse failed");
        let from_reader = parse_reader(Cursor::new(source)).expect("parse failed");
        assert_eq!(from_text, from_reader);
        assert_eq!(from_text.blocks.len(), 2);
    }

    #[test]
    fn test_parse_rules_is_one_rule_per_line() {
        let rules = parse_rules("Show\n\n# Hide\nNonsense\n");
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[0].category(), Category::Visibility);
        assert_eq!(rules[1].category(), Category::Blank);
        assert_eq!(rules[2].category(), Category::Disabled);
        assert_eq!(rules[3].category(), Category::Error);
    }
}
