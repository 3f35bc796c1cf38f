//! Document builder
//!
//! Regroups the flat rule list into [RuleBlock]s. Building runs in two passes: block spans
//! are planned over the rule slice first, then the rules are moved into their blocks.
//!
//! Span rules:
//!     - Content before the first `Show`/`Hide` is corrected first: disabled rules that
//!       cannot open a block become blanks, live rules become top-level parse errors.
//!     - An enabled block runs from its `Show`/`Hide` to its last live rule, then extends
//!       over commented content up to the first commented `Show`/`Hide`.
//!     - Every commented `Show`/`Hide` outside an enabled block opens a disabled block that
//!       runs to its last commented rule.
//!     - Blank lines without a comment between blocks belong to no block.

use crate::filter::ast::{Category, ParseError, ParsedDocument, Rule, RuleBlock, RuleKind};
use crate::filter::error::FilterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
    disabled: bool,
}

/// Group rules into blocks.
///
/// Fails only when a planned block turns out empty, which indicates a bug in span planning.
pub fn build_document(mut rules: Vec<Rule>) -> Result<ParsedDocument, FilterError> {
    let (first, errors) = correct_lead(&mut rules);
    if !errors.is_empty() {
        log::debug!("{} rules before the first block", errors.len());
    }
    let spans = plan_blocks(&rules, first);

    let mut slots: Vec<Option<Rule>> = rules.into_iter().map(Some).collect();
    let mut blocks = Vec::with_capacity(spans.len());
    for span in spans {
        let block_rules: Vec<Rule> = slots
            .get_mut(span.start..span.end)
            .unwrap_or_default()
            .iter_mut()
            .filter_map(Option::take)
            .collect();
        if block_rules.is_empty() {
            return Err(FilterError::EmptyBlock {
                start: span.start,
                end: span.end,
            });
        }
        blocks.push(RuleBlock::new(block_rules, span.disabled));
    }

    Ok(ParsedDocument { blocks, errors })
}

/// Fix up everything before the first enabled `Show`/`Hide`.
///
/// Returns the index of that rule (or the rule count) and the collected errors.
fn correct_lead(rules: &mut [Rule]) -> (usize, Vec<ParseError>) {
    let mut errors = Vec::new();
    let mut in_disabled_block = false;

    for (index, rule) in rules.iter_mut().enumerate() {
        match rule.category() {
            Category::Blank => {}
            Category::Visibility => return (index, errors),
            Category::Disabled => {
                if rule.is_disabled_visibility() {
                    in_disabled_block = true;
                } else if !in_disabled_block {
                    *rule = Rule::blank();
                }
            }
            Category::Error => errors.extend(rule.as_error().cloned()),
            Category::Criterion | Category::Action => {
                let error = ParseError::new(index + 1, 0, rule.kind.to_string())
                    .with_message("rule outside of a block")
                    .with_kind(rule.filter_kind());
                errors.push(error.clone());
                let comment = rule.comment.take();
                *rule = Rule::new(RuleKind::Error(error)).with_comment(comment);
            }
        }
    }
    (rules.len(), errors)
}

fn plan_blocks(rules: &[Rule], first: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut position = 0;
    let mut boundary = first;

    loop {
        plan_disabled(rules, position, boundary, &mut spans);
        if boundary >= rules.len() {
            break;
        }
        let next = next_visibility(rules, boundary + 1);
        let end = block_end(rules, boundary, next);
        log::debug!("block at rules {}..{}", boundary, end);
        spans.push(Span {
            start: boundary,
            end,
            disabled: false,
        });
        position = end;
        boundary = next;
    }
    spans
}

fn next_visibility(rules: &[Rule], from: usize) -> usize {
    rules
        .iter()
        .skip(from)
        .position(Rule::is_visibility)
        .map_or(rules.len(), |offset| from + offset)
}

fn is_live(rule: &Rule) -> bool {
    !matches!(rule.category(), Category::Blank | Category::Disabled)
}

/// Exclusive end of the enabled block opened at `start`, given the next opener at `next`
fn block_end(rules: &[Rule], start: usize, next: usize) -> usize {
    let mut end = start + 1;
    for (index, rule) in rules.iter().enumerate().take(next).skip(start + 1) {
        if is_live(rule) {
            end = index + 1;
        }
    }
    for (index, rule) in rules.iter().enumerate().take(next).skip(end) {
        if rule.is_disabled_visibility() {
            break;
        }
        if !rule.is_pure_blank() {
            end = index + 1;
        }
    }
    end
}

/// Disabled blocks between two enabled ones
fn plan_disabled(rules: &[Rule], from: usize, to: usize, spans: &mut Vec<Span>) {
    let mut open: Option<Span> = None;
    for (index, rule) in rules.iter().enumerate().take(to).skip(from) {
        if rule.is_disabled_visibility() {
            spans.extend(open.take());
            open = Some(Span {
                start: index,
                end: index + 1,
                disabled: true,
            });
        } else if let Some(span) = open.as_mut() {
            if !rule.is_pure_blank() {
                span.end = index + 1;
            }
        }
    }
    if let Some(span) = open {
        log::debug!("disabled block at rules {}..{}", span.start, span.end);
    }
    spans.extend(open);
}
