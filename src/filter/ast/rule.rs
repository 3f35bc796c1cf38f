use serde::Serialize;

use super::{Action, Criterion, FilterKind, ParseError, Visibility};

/// One parsed line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub kind: RuleKind,
    /// Text after a trailing `#`, trimmed
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "value")]
pub enum RuleKind {
    Blank,
    Error(ParseError),
    Visibility(Visibility),
    /// A rule found behind a single `#`
    Disabled(Box<Rule>),
    Criterion(Criterion),
    Action(Action),
}

/// Coarse classification used by the document builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Visibility,
    Criterion,
    Action,
    Disabled,
    Blank,
    Error,
}

impl Rule {
    pub fn new(kind: RuleKind) -> Self {
        Self { kind, comment: None }
    }

    pub fn blank() -> Self {
        Self::new(RuleKind::Blank)
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn disabled(inner: Rule) -> Self {
        Self::new(RuleKind::Disabled(Box::new(inner)))
    }

    pub fn category(&self) -> Category {
        match self.kind {
            RuleKind::Blank => Category::Blank,
            RuleKind::Error(_) => Category::Error,
            RuleKind::Visibility(_) => Category::Visibility,
            RuleKind::Disabled(_) => Category::Disabled,
            RuleKind::Criterion(_) => Category::Criterion,
            RuleKind::Action(_) => Category::Action,
        }
    }

    /// Keyword of the rule, looking through a disabling `#`
    pub fn filter_kind(&self) -> Option<FilterKind> {
        match &self.kind {
            RuleKind::Blank => None,
            RuleKind::Error(error) => error.kind,
            RuleKind::Visibility(visibility) => Some((*visibility).into()),
            RuleKind::Disabled(inner) => inner.filter_kind(),
            RuleKind::Criterion(criterion) => Some(criterion.kind),
            RuleKind::Action(action) => Some(action.kind()),
        }
    }

    pub fn is_visibility(&self) -> bool {
        matches!(self.kind, RuleKind::Visibility(_))
    }

    /// `# Show` or `# Hide`
    pub fn is_disabled_visibility(&self) -> bool {
        match &self.kind {
            RuleKind::Disabled(inner) => inner.is_visibility(),
            _ => false,
        }
    }

    /// True for rules that can start a block, enabled or disabled
    pub fn opens_block(&self) -> bool {
        self.is_visibility() || self.is_disabled_visibility()
    }

    /// Blank line without any comment text
    pub fn is_pure_blank(&self) -> bool {
        matches!(self.kind, RuleKind::Blank) && self.comment.is_none()
    }

    pub fn as_error(&self) -> Option<&ParseError> {
        match &self.kind {
            RuleKind::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl From<RuleKind> for Rule {
    fn from(kind: RuleKind) -> Self {
        Rule::new(kind)
    }
}
