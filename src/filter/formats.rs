//! Output formats
//!
//! - [text]: canonical filter syntax for every AST value, plus rule listings and block
//!   dumps for the terminal.
//! - [json]: serde_json output of rules, documents and tokens.
//! - [diagnostic]: caret-style rendering of parse errors.

pub mod diagnostic;
pub mod json;
pub mod text;

pub use diagnostic::render_error;
pub use text::{render_document, render_rules, render_tokens, RenderOptions};
