use serde::Serialize;

use super::{ParseError, Rule};

/// A visibility directive and the rules that follow it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleBlock {
    /// Trailing comment of the opening rule
    pub name: Option<String>,
    pub rules: Vec<Rule>,
    pub is_disabled: bool,
}

impl RuleBlock {
    pub fn new(rules: Vec<Rule>, is_disabled: bool) -> Self {
        let name = rules.first().and_then(|rule| rule.comment.clone());
        Self {
            name,
            rules,
            is_disabled,
        }
    }

    pub fn parse_errors(&self) -> impl Iterator<Item = &ParseError> {
        self.rules.iter().filter_map(Rule::as_error)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub blocks: Vec<RuleBlock>,
    /// Content found before the first block
    pub errors: Vec<ParseError>,
}

impl ParsedDocument {
    pub fn enabled_blocks(&self) -> impl Iterator<Item = &RuleBlock> {
        self.blocks.iter().filter(|block| !block.is_disabled)
    }

    pub fn disabled_blocks(&self) -> impl Iterator<Item = &RuleBlock> {
        self.blocks.iter().filter(|block| block.is_disabled)
    }

    /// Top-level errors followed by the errors inside enabled blocks.
    ///
    /// Errors inside a disabled block are always top-level errors as well.
    pub fn parse_errors(&self) -> impl Iterator<Item = &ParseError> {
        self.errors
            .iter()
            .chain(self.enabled_blocks().flat_map(RuleBlock::parse_errors))
    }

    pub fn has_errors(&self) -> bool {
        self.parse_errors().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ast::{RuleKind, Visibility};

    #[test]
    fn test_block_name_comes_from_first_rule() {
        let show = Rule::new(RuleKind::Visibility(Visibility::Show))
            .with_comment(Some("Currency".to_string()));
        let block = RuleBlock::new(vec![show, Rule::blank()], false);
        assert_eq!(block.name.as_deref(), Some("Currency"));
    }

    #[test]
    fn test_error_collection() {
        let block = |line: usize, is_disabled: bool| {
            RuleBlock::new(
                vec![
                    Rule::new(RuleKind::Visibility(Visibility::Hide)),
                    Rule::new(RuleKind::Error(ParseError::new(line, 0, "Nope"))),
                ],
                is_disabled,
            )
        };
        let document = ParsedDocument {
            blocks: vec![block(2, false), block(4, true)],
            errors: vec![ParseError::new(1, 0, "Junk")],
        };

        let lines: Vec<usize> = document.parse_errors().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 2]);
        assert!(document.has_errors());
        assert_eq!(document.enabled_blocks().count(), 1);
        assert_eq!(document.disabled_blocks().count(), 1);
    }
}
