use serde::Serialize;

use super::{Comparison, FilterKind, GemQualityType, Rarity};

/// A match condition gating a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criterion {
    pub kind: FilterKind,
    pub comparison: Comparison,
    pub value: CriterionValue,
}

impl Criterion {
    pub fn new(kind: FilterKind, comparison: Comparison, value: CriterionValue) -> Self {
        Self {
            kind,
            comparison,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum CriterionValue {
    Boolean(bool),
    Integer(u32),
    /// Unquoted names, in the order written
    Strings(Vec<String>),
    ExplicitMods {
        count: Option<u32>,
        mods: Vec<String>,
    },
    Rarity(Vec<Rarity>),
    GemQuality(GemQualityType),
    Sockets(SocketSpec),
}

/// Socket count plus a sorted multiset of socket colors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct SocketSpec {
    pub count: Option<u32>,
    pub colors: String,
}

impl SocketSpec {
    pub fn new(count: Option<u32>, colors: &str) -> Self {
        let mut letters: Vec<char> = colors.chars().collect();
        letters.sort_unstable();
        Self {
            count,
            colors: letters.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_colors_are_sorted() {
        assert_eq!(SocketSpec::new(Some(5), "GGB"), SocketSpec::new(Some(5), "BGG"));
        assert_eq!(SocketSpec::new(None, "WRDA").colors, "ADRW");
    }
}
