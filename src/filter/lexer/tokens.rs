//! Token definitions for item filter files
//!
//! Numbers immediately followed by a letter or underscore are words, not numbers: `5GGG`
//! is a single `String` token. Logos picks the longest match, so the second `String`
//! pattern wins over `Number` in that case.
use logos::Logos;
use serde::Serialize;

/// All lexeme kinds of the filter format
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    #[token("#")]
    Pound,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token("<")]
    LessThan,
    #[token("<=")]
    LessOrEqual,
    #[token(">")]
    GreaterThan,
    #[token(">=")]
    GreaterOrEqual,
    #[token("!")]
    Exclamation,
    #[token("-")]
    Dash,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"\p{L}[\p{L}\p{Nd}_]*")]
    #[regex(r"[0-9]+[\p{L}_][\p{L}\p{Nd}_]*")]
    String,

    #[regex(r#""[^"]*""#)]
    QuotedString,

    #[regex(r"[ \t]+")]
    Whitespace,

    /// Produced by the tokenizer at the end of every line. Lines never contain terminators,
    /// a `\r` inside one is `Invalid`.
    EndOfLine,

    EndOfFile,

    // Unterminated quote, runs to the end of the line. Bytes logos cannot match at all are
    // reported with this kind by the tokenizer as well.
    #[regex(r#""[^"]*"#)]
    Invalid,
}

impl TokenKind {
    /// Check if this token ends the current rule
    pub fn ends_rule(&self) -> bool {
        matches!(
            self,
            TokenKind::Pound | TokenKind::EndOfLine | TokenKind::EndOfFile
        )
    }
}
