use serde::Serialize;
use std::fmt;

use super::FilterKind;

/// A line that could not be matched, kept in place of the rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    /// Byte offset into `text` where matching diverged
    pub column: usize,
    /// The raw line
    pub text: String,
    pub message: Option<String>,
    /// Keyword being matched, `None` when the keyword itself was not recognised
    pub kind: Option<FilterKind>,
}

impl ParseError {
    pub fn new(line: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            column,
            text: text.into(),
            message: None,
            kind: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_kind(mut self, kind: Option<FilterKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Column counted in characters, for display
    pub fn char_column(&self) -> usize {
        let end = self.column.min(self.text.len());
        self.text
            .char_indices()
            .take_while(|(offset, _)| *offset < end)
            .count()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}:{}: ", self.line, self.char_column() + 1)?;
        match (&self.message, self.kind) {
            (Some(message), Some(kind)) => write!(f, "{}: {}", kind, message),
            (Some(message), None) => f.write_str(message),
            (None, Some(kind)) => write!(f, "invalid {} rule", kind),
            (None, None) => f.write_str("invalid rule"),
        }
    }
}
