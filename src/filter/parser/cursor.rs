//! Token cursor over a single line

use crate::filter::lexer::{Token, TokenKind};

/// Where and why a grammar stopped matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    /// Byte offset into the line
    pub column: usize,
    pub message: String,
}

impl GrammarError {
    pub fn new(column: usize, message: impl Into<String>) -> Self {
        Self {
            column,
            message: message.into(),
        }
    }
}

pub type GrammarResult<T> = Result<T, GrammarError>;

/// Read position in the tokens of one line.
///
/// Past the last token the cursor keeps reporting an `EndOfLine` at the end of the line, so
/// grammars never have to check bounds.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    line: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            line,
            tokens,
            pos: 0,
        }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn peek(&self) -> Token {
        self.tokens
            .get(self.pos)
            .copied()
            .unwrap_or_else(|| Token::new(TokenKind::EndOfLine, self.line.len(), self.line.len()))
    }

    pub fn kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub fn text(&self) -> &'a str {
        self.text_of(&self.peek())
    }

    pub fn text_of(&self, token: &Token) -> &'a str {
        self.line.get(token.span()).unwrap_or("")
    }

    /// Byte offset of the current token
    pub fn column(&self) -> usize {
        self.peek().start
    }

    pub fn bump(&mut self) -> Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn skip_whitespace(&mut self) {
        while self.kind() == TokenKind::Whitespace {
            self.bump();
        }
    }

    /// Consume the current token if it has the given kind
    pub fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.kind() == kind {
            Some(self.bump())
        } else {
            None
        }
    }

    /// Skip whitespace and check for `#`, end of line or end of input
    pub fn at_end_of_rule(&mut self) -> bool {
        self.skip_whitespace();
        self.kind().ends_rule()
    }

    pub fn error<T>(&self, message: impl Into<String>) -> GrammarResult<T> {
        Err(GrammarError::new(self.column(), message))
    }

    pub fn expect_end(&mut self) -> GrammarResult<()> {
        if self.at_end_of_rule() {
            Ok(())
        } else {
            self.error(format!("unexpected `{}`", self.text()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::lexer::{StrLines, Tokenizer};

    fn tokens(line: &str) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(StrLines::new(line));
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.advance();
            if token.is_line_end() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn test_walks_tokens() {
        let line = "Quality  > 5";
        let tokens = tokens(line);
        let mut cursor = Cursor::new(line, &tokens);

        assert_eq!(cursor.text(), "Quality");
        cursor.bump();
        cursor.skip_whitespace();
        assert_eq!(cursor.accept(TokenKind::GreaterThan).map(|t| t.start), Some(9));
        assert!(cursor.accept(TokenKind::Number).is_none());
        cursor.skip_whitespace();
        assert_eq!(cursor.text(), "5");
        cursor.bump();
        assert!(cursor.at_end_of_rule());
    }

    #[test]
    fn test_end_is_sticky() {
        let line = "Show";
        let tokens = tokens(line);
        let mut cursor = Cursor::new(line, &tokens);
        cursor.bump();
        assert_eq!(cursor.kind(), TokenKind::EndOfLine);
        assert_eq!(cursor.bump().start, 4);
        assert_eq!(cursor.column(), 4);
        assert_eq!(cursor.text(), "");
    }

    #[test]
    fn test_expect_end_reports_column() {
        let line = "Show Extra";
        let tokens = tokens(line);
        let mut cursor = Cursor::new(line, &tokens);
        cursor.bump();
        let error = cursor.expect_end().unwrap_err();
        assert_eq!(error.column, 5);
        assert_eq!(error.message, "unexpected `Extra`");
    }

    #[test]
    fn test_comment_ends_rule() {
        let line = "Show # named";
        let tokens = tokens(line);
        let mut cursor = Cursor::new(line, &tokens);
        cursor.bump();
        assert!(cursor.expect_end().is_ok());
        assert_eq!(cursor.kind(), TokenKind::Pound);
    }
}
