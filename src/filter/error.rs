//! Error types
//!
//! Malformed filter lines are not errors at this level: they stay in the document as
//! `ParseError` rules. [FilterError] covers what stops processing altogether.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    /// Reading the input failed
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The builder planned a block with no rules
    #[error("internal error: empty block planned for rules {start}..{end}")]
    EmptyBlock { start: usize, end: usize },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Unknown processing stage or output format
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
