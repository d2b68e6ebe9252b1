//! The aspect-opinion pattern value type.

use serde::{Deserialize, Serialize};

use crate::taxonomy::RelationKind;

/// A (head, modifier) token pair joined by a relation.
///
/// Identity is the full value tuple. Ancestry lives in the sentence's
/// [`LineageGraph`](crate::LineageGraph), so patterns reached through
/// different combination paths compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pattern {
    pub head: String,
    pub head_tag: String,
    pub modifier: String,
    pub modifier_tag: String,
    pub relation: RelationKind,
}

impl Pattern {
    pub fn new(
        head: impl Into<String>,
        head_tag: impl Into<String>,
        modifier: impl Into<String>,
        modifier_tag: impl Into<String>,
        relation: RelationKind,
    ) -> Self {
        Self {
            head: head.into(),
            head_tag: head_tag.into(),
            modifier: modifier.into(),
            modifier_tag: modifier_tag.into(),
            relation,
        }
    }

    /// True if either side is `word`.
    pub fn mentions(&self, word: &str) -> bool {
        self.head == word || self.modifier == word
    }

    /// The described feature: the noun side, or the head when that is ambiguous.
    pub fn aspect(&self) -> &str {
        if is_noun(&self.modifier_tag) && !is_noun(&self.head_tag) {
            &self.modifier
        } else {
            &self.head
        }
    }

    /// The descriptive word: whichever side is not the aspect.
    pub fn opinion(&self) -> &str {
        if is_noun(&self.modifier_tag) && !is_noun(&self.head_tag) {
            &self.head
        } else {
            &self.modifier
        }
    }

    /// Short phrase submitted to the sentiment oracle, opinion first
    /// ("great battery life").
    pub fn to_phrase(&self) -> String {
        format!("{} {}", self.opinion(), self.aspect())
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}/{}, {}/{})",
            self.relation, self.head, self.head_tag, self.modifier, self.modifier_tag
        )
    }
}

fn is_noun(tag: &str) -> bool {
    tag.starts_with("NN")
}
