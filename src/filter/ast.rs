//! Rule and document model
//!
//! A parsed line is a [Rule]: a [RuleKind] plus the optional trailing comment found after
//! a `#`. Rule kinds are a closed set (blank, parse error, visibility directive, disabled
//! rule, criterion, action), and [Rule::category] classifies them for the document builder.
//!
//! Keyword vocabularies (filter keywords, rarities, icon palettes) are plain enums whose
//! `ALL` table doubles as the lookup table for the grammar.

pub mod action;
pub mod comparison;
pub mod criterion;
pub mod document;
pub mod error;
pub mod keyword;
pub mod kind;
pub mod rule;
pub mod values;

pub use action::{Action, AlertSound, IconStyle, MinimapIcon, Rgba};
pub use comparison::Comparison;
pub use criterion::{Criterion, CriterionValue, SocketSpec};
pub use document::{ParsedDocument, RuleBlock};
pub use error::ParseError;
pub use kind::{FilterKind, Visibility};
pub use rule::{Category, Rule, RuleKind};
pub use values::{GemQualityType, IconColor, IconShape, Rarity};
