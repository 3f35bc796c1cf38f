//! Rule matcher
//!
//! [RuleMatcher] turns a stream of lines into a stream of [Rule](crate::filter::ast::Rule)s,
//! one rule per line. The keyword of a line is looked up in a first-letter table of
//! grammars ([grammar]); every grammar is a plain function over the tokens of that line.
//! A malformed line never stops the stream: it becomes a `ParseError` rule pointing at the
//! token where matching diverged.

pub mod arguments;
pub mod cursor;
pub mod grammar;
pub mod matcher;

pub use cursor::{Cursor, GrammarError, GrammarResult};
pub use grammar::{lookup, GrammarSpec};
pub use matcher::{match_line, RuleMatcher};
