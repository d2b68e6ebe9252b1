//! Insertion-ordered set of patterns.

use opine_core::types::collections::FxHashSet;
use serde::{Serialize, Serializer};

use crate::pattern::Pattern;

/// A set of patterns that remembers first-insertion order, so document
/// results are deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    order: Vec<Pattern>,
    seen: FxHashSet<Pattern>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `pattern`; returns false if an equal pattern was already present.
    pub fn insert(&mut self, pattern: Pattern) -> bool {
        if self.seen.contains(&pattern) {
            return false;
        }
        self.seen.insert(pattern.clone());
        self.order.push(pattern);
        true
    }

    /// Union `other` into `self`, keeping `self`'s order first.
    pub fn union(&mut self, other: PatternSet) {
        for pattern in other.order {
            self.insert(pattern);
        }
    }

    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.seen.contains(pattern)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[Pattern] {
        &self.order
    }
}

impl FromIterator<Pattern> for PatternSet {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        let mut set = Self::new();
        for pattern in iter {
            set.insert(pattern);
        }
        set
    }
}

impl Extend<Pattern> for PatternSet {
    fn extend<I: IntoIterator<Item = Pattern>>(&mut self, iter: I) {
        for pattern in iter {
            self.insert(pattern);
        }
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl Serialize for PatternSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::RelationKind;

    fn p(head: &str) -> Pattern {
        Pattern::new(head, "NN", "good", "JJ", RelationKind::Amod)
    }

    #[test]
    fn keeps_first_insertion_order() {
        let set: PatternSet = [p("b"), p("a"), p("b"), p("c")].into_iter().collect();
        let heads: Vec<_> = set.iter().map(|x| x.head.as_str()).collect();
        assert_eq!(heads, ["b", "a", "c"]);
    }

    #[test]
    fn union_is_order_preserving_and_deduplicating() {
        let mut left: PatternSet = [p("a"), p("b")].into_iter().collect();
        let right: PatternSet = [p("b"), p("c")].into_iter().collect();
        left.union(right);
        assert_eq!(left.len(), 3);
        assert_eq!(left.as_slice()[2].head, "c");
    }
}
