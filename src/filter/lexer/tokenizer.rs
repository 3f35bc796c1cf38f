//! Stateful line tokenizer
//!
//! [Tokenizer::advance] returns a fresh [Token] value on every call. Tokens only hold a
//! kind and byte offsets into the current line; their text is borrowed from the tokenizer
//! with [Tokenizer::text] and has to be copied out before the tokenizer moves to another
//! line.

use std::io;
use std::ops::Range;

use logos::Logos;

use super::source::LineSource;
use super::tokens::TokenKind;

/// A lexeme of the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        debug_assert!(end >= start);
        Self { kind, start, end }
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True for the synthetic tokens closing a line
    pub fn is_line_end(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfLine | TokenKind::EndOfFile)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No line loaded yet, or the previous one was fully consumed
    NeedLine,
    InLine,
    Exhausted,
}

/// Splits lines pulled from a [LineSource] into tokens.
#[derive(Debug)]
pub struct Tokenizer<S> {
    source: S,
    line: String,
    line_number: usize,
    pos: usize,
    state: State,
    error: Option<io::Error>,
}

impl<S: LineSource> Tokenizer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            line: String::new(),
            line_number: 0,
            pos: 0,
            state: State::NeedLine,
            error: None,
        }
    }

    /// Text of the current line
    pub fn line(&self) -> &str {
        &self.line
    }

    /// 1-based number of the current line, 0 before the first line is read
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Text of a token produced on the current line
    pub fn text(&self, token: &Token) -> &str {
        self.line.get(token.span()).unwrap_or("")
    }

    /// The I/O error that ended the stream early, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Drop whatever is left of the current line and load the next one.
    ///
    /// Returns false once the source is exhausted.
    pub fn next_line(&mut self) -> bool {
        if self.state == State::Exhausted {
            return false;
        }
        match self.source.next_line() {
            Ok(Some(line)) => {
                self.line = line;
                self.line_number += 1;
                self.pos = 0;
                self.state = State::InLine;
                true
            }
            Ok(None) => {
                self.exhaust();
                false
            }
            Err(err) => {
                log::warn!("line source failed after line {}: {}", self.line_number, err);
                self.error = Some(err);
                self.exhaust();
                false
            }
        }
    }

    /// Produce the next token.
    ///
    /// `EndOfLine` is reported once per line; the call after it moves on to the next line.
    pub fn advance(&mut self) -> Token {
        let state = self.state;
        match state {
            State::Exhausted => return self.end_of_file(),
            State::NeedLine if !self.next_line() => return self.end_of_file(),
            _ => {}
        }

        let start = self.pos;
        let rest = &self.line[start..];
        let mut lexer = TokenKind::lexer(rest);
        let token = match lexer.next() {
            None => {
                self.state = State::NeedLine;
                return Token::new(TokenKind::EndOfLine, self.line.len(), self.line.len());
            }
            Some(Ok(kind)) => {
                let span = lexer.span();
                Token::new(kind, start + span.start, start + span.end)
            }
            Some(Err(())) => {
                // Always step over a whole character so offsets stay on char boundaries
                let width = rest.chars().next().map_or(1, char::len_utf8);
                Token::new(TokenKind::Invalid, start, start + width)
            }
        };

        self.pos = token.end;
        token
    }

    fn exhaust(&mut self) {
        self.line.clear();
        self.pos = 0;
        self.state = State::Exhausted;
    }

    fn end_of_file(&self) -> Token {
        Token::new(TokenKind::EndOfFile, 0, 0)
    }
}
