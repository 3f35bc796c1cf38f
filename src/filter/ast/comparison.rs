use serde::Serialize;
use std::fmt;

/// Operator prefixing a criterion value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Comparison {
    /// `!`
    NotEquals,
    /// `=`, also the implied operator when none is written
    #[default]
    Equals,
    /// `==`
    ExactlyEquals,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl Comparison {
    pub const ALL: [Comparison; 7] = [
        Comparison::NotEquals,
        Comparison::Equals,
        Comparison::ExactlyEquals,
        Comparison::LessThan,
        Comparison::LessOrEqual,
        Comparison::GreaterThan,
        Comparison::GreaterOrEqual,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Comparison::NotEquals => "!",
            Comparison::Equals => "=",
            Comparison::ExactlyEquals => "==",
            Comparison::LessThan => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterOrEqual => ">=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }

    /// Operators allowed in front of a string list
    pub fn is_equality(self) -> bool {
        matches!(self, Comparison::Equals | Comparison::ExactlyEquals)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for comparison in Comparison::ALL {
            assert_eq!(Comparison::from_symbol(comparison.symbol()), Some(comparison));
        }
        assert_eq!(Comparison::from_symbol("=>"), None);
    }

    #[test]
    fn test_equality_operators() {
        assert!(Comparison::Equals.is_equality());
        assert!(Comparison::ExactlyEquals.is_equality());
        assert!(!Comparison::NotEquals.is_equality());
        assert!(!Comparison::GreaterOrEqual.is_equality());
    }
}
