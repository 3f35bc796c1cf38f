use std::io::{self, BufRead};

use crate::filter::ast::{FilterKind, ParseError, Rule, RuleKind};
use crate::filter::lexer::{LineSource, ReaderLines, StrLines, Token, TokenKind, Tokenizer};

use super::cursor::{Cursor, GrammarError};
use super::grammar;

/// Streams one [Rule] per input line.
pub struct RuleMatcher<S> {
    tokenizer: Tokenizer<S>,
    tokens: Vec<Token>,
}

impl<S: LineSource> RuleMatcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            tokens: Vec::new(),
        }
    }

    /// Match the next line; `None` once the input is exhausted
    pub fn next_rule(&mut self) -> Option<Rule> {
        self.tokens.clear();
        loop {
            let token = self.tokenizer.advance();
            if token.kind == TokenKind::EndOfFile && self.tokens.is_empty() {
                return None;
            }
            if token.is_line_end() {
                break;
            }
            self.tokens.push(token);
        }

        let line_number = self.tokenizer.line_number();
        let rule = match_line(self.tokenizer.line(), &self.tokens, line_number);
        log::trace!("line {}: {:?} rule", line_number, rule.category());
        Some(rule)
    }

    /// Number of the line matched last
    pub fn line_number(&self) -> usize {
        self.tokenizer.line_number()
    }

    /// The I/O error that cut the input short, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.tokenizer.take_error()
    }
}

impl<'a> RuleMatcher<StrLines<'a>> {
    pub fn for_text(text: &'a str) -> Self {
        Self::new(StrLines::new(text))
    }
}

impl<R: BufRead> RuleMatcher<ReaderLines<R>> {
    pub fn for_reader(reader: R) -> Self {
        Self::new(ReaderLines::new(reader))
    }
}

impl<S: LineSource> Iterator for RuleMatcher<S> {
    type Item = Rule;

    fn next(&mut self) -> Option<Rule> {
        self.next_rule()
    }
}

/// Match the tokens of one line, without its `EndOfLine`.
pub fn match_line(line: &str, tokens: &[Token], line_number: usize) -> Rule {
    let mut cursor = Cursor::new(line, tokens);
    cursor.skip_whitespace();

    let commented = cursor.accept(TokenKind::Pound).is_some();
    if commented {
        cursor.skip_whitespace();
        if cursor.kind() == TokenKind::Pound {
            // `##` marks a plain comment
            let text = line.trim_start().trim_start_matches(['#', ' ', '\t']);
            return Rule::blank().with_comment(comment_text(text));
        }
    }
    if matches!(cursor.kind(), TokenKind::EndOfLine | TokenKind::EndOfFile) {
        return Rule::blank();
    }

    let body_start = cursor.column();
    match match_rule(&mut cursor) {
        Ok(kind) => {
            let comment = comment_after(line, tokens, cursor.column());
            if commented {
                Rule::disabled(Rule::new(kind)).with_comment(comment)
            } else {
                Rule::new(kind).with_comment(comment)
            }
        }
        Err(_) if commented => Rule::blank().with_comment(comment_text(&line[body_start..])),
        Err((error, kind)) => {
            let comment = comment_after(line, tokens, error.column);
            let error = ParseError::new(line_number, error.column, line)
                .with_message(error.message)
                .with_kind(kind);
            Rule::new(RuleKind::Error(error)).with_comment(comment)
        }
    }
}

fn match_rule(cursor: &mut Cursor<'_>) -> Result<RuleKind, (GrammarError, Option<FilterKind>)> {
    if cursor.kind() != TokenKind::String {
        let error = GrammarError::new(cursor.column(), "expected a filter keyword");
        return Err((error, None));
    }
    let keyword = cursor.text();
    let spec = grammar::lookup(keyword).ok_or_else(|| {
        let error = GrammarError::new(cursor.column(), format!("unknown keyword `{}`", keyword));
        (error, None)
    })?;
    cursor.bump();
    spec.parse(cursor).map_err(|error| (error, Some(spec.kind)))
}

/// Text after the first `#` token starting at or after `column`
fn comment_after(line: &str, tokens: &[Token], column: usize) -> Option<String> {
    let pound = tokens
        .iter()
        .find(|token| token.kind == TokenKind::Pound && token.start >= column)?;
    line.get(pound.end..).and_then(comment_text)
}

fn comment_text(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
