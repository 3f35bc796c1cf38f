//! Lexer
//!
//!     Tokenization for item filter files. The lexical grammar is small and fixed: operators,
//!     numbers, words, quoted strings, whitespace and the comment marker. It is defined with
//!     the logos derive macro in [tokens].
//!
//!     The tokenizer never recognizes keywords. `Show`, `Hide` and `AreaLevel` all come out
//!     as `String` tokens, and the rule matcher resolves them by exact text comparison. This
//!     keeps the lexical grammar stable while the keyword grammar grows.
//!
//! Line Handling
//!
//!     Filters are line oriented: a rule always completes on the line where it starts. The
//!     [Tokenizer] pulls one line at a time from a [LineSource] and runs logos over that line
//!     only. It reports `EndOfLine` at the end of each line and `EndOfFile` once the source is
//!     exhausted.

pub mod source;
pub mod tokenizer;
pub mod tokens;

use std::io;

pub use source::{split_lines, LineSource, ReaderLines, SplitLines, StrLines};
pub use tokenizer::{Token, Tokenizer};
pub use tokens::TokenKind;

/// Exactly one line, never split
struct SingleLine(Option<String>);

impl LineSource for SingleLine {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.0.take())
    }
}

/// Convenience function to tokenize a single line, including the trailing `EndOfLine`.
///
/// The line is not split further: line terminators inside it are `Invalid` tokens.
pub fn tokenize_line(line: &str) -> Vec<(TokenKind, &str)> {
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    let mut tokenizer = Tokenizer::new(SingleLine(Some(line.to_string())));
    let mut spans = Vec::new();
    loop {
        let token = tokenizer.advance();
        spans.push((token.kind, token.span()));
        if token.is_line_end() {
            break;
        }
    }
    spans
        .into_iter()
        .map(|(kind, span)| (kind, line.get(span).unwrap_or("")))
        .collect()
}
