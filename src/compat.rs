//! Edge-type compatibility: which label pairs are worth comparing at all.

use crate::piece::EdgeType;

/// Table of edge-type pairs allowed into geometric comparison.
///
/// Purely label-based, never geometry-dependent: it exists to prune the
/// 4x4 combination grid before any distance is computed. Pairs are stored
/// unordered, so `is_compatible(a, b) == is_compatible(b, a)`.
#[derive(Debug, Clone)]
pub struct CompatibilityRules {
    pairs: Vec<(EdgeType, EdgeType)>,
}

impl CompatibilityRules {
    /// The physical rule set: a tab mates with a blank, a flat (border)
    /// edge lines up with another flat edge. Everything else is rejected.
    pub fn standard() -> Self {
        Self {
            pairs: vec![
                (EdgeType::Tab, EdgeType::Blank),
                (EdgeType::Flat, EdgeType::Flat),
            ],
        }
    }

    /// Start from an empty table (nothing compatible).
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Add an allowed pair. Order does not matter.
    pub fn allow(mut self, a: EdgeType, b: EdgeType) -> Self {
        if !self.is_compatible(a, b) {
            self.pairs.push((a, b));
        }
        self
    }

    /// Whether two edge types may be geometrically compared.
    pub fn is_compatible(&self, a: EdgeType, b: EdgeType) -> bool {
        self.pairs
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

impl Default for CompatibilityRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::EdgeType::{Blank, Flat, Tab};

    #[test]
    fn standard_table() {
        let rules = CompatibilityRules::standard();
        assert!(rules.is_compatible(Tab, Blank));
        assert!(rules.is_compatible(Blank, Tab));
        assert!(rules.is_compatible(Flat, Flat));
        assert!(!rules.is_compatible(Tab, Tab));
        assert!(!rules.is_compatible(Blank, Blank));
        assert!(!rules.is_compatible(Flat, Tab));
        assert!(!rules.is_compatible(Flat, Blank));
    }

    #[test]
    fn custom_table() {
        let rules = CompatibilityRules::empty().allow(Flat, Blank);
        assert!(rules.is_compatible(Blank, Flat));
        assert!(!rules.is_compatible(Tab, Blank));
    }
}
