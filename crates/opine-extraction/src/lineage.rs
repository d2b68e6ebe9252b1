//! Sentence-scoped arena of patterns and their mother/father ancestry.
//!
//! Nodes are patterns anchored at sentence positions; edges point from a
//! combined pattern to its two ancestors. One ancestor may be cited by many
//! descendants, so the lineage is a DAG and nodes are addressed by handle.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::pattern::Pattern;

/// Handle to a node in a [`LineageGraph`]. Only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternId(NodeIndex);

impl PatternId {
    pub fn index(self) -> usize {
        self.0.index()
    }
}

/// Which ancestor an edge leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lineage {
    /// The seed pattern of the producing round.
    Mother,
    /// The partner drawn from the primary list.
    Father,
}

/// A pattern together with the sentence positions of its two tokens.
#[derive(Debug, Clone)]
pub struct PatternNode {
    pub pattern: Pattern,
    pub head_index: u32,
    pub modifier_index: u32,
}

/// One side of a pattern, anchored in the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor<'a> {
    pub word: &'a str,
    pub tag: &'a str,
    pub index: u32,
}

impl<'a> Anchor<'a> {
    /// Same word at the same position.
    pub fn same_token(&self, other: &Anchor<'_>) -> bool {
        self.index == other.index && self.word == other.word
    }
}

impl PatternNode {
    /// `[head, modifier]` anchors.
    pub fn anchors(&self) -> [Anchor<'_>; 2] {
        [
            Anchor {
                word: &self.pattern.head,
                tag: &self.pattern.head_tag,
                index: self.head_index,
            },
            Anchor {
                word: &self.pattern.modifier,
                tag: &self.pattern.modifier_tag,
                index: self.modifier_index,
            },
        ]
    }
}

/// Arena of every pattern built while processing one sentence.
#[derive(Debug, Default)]
pub struct LineageGraph {
    graph: DiGraph<PatternNode, Lineage>,
}

impl LineageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern with no ancestry.
    pub fn add_primary(
        &mut self,
        pattern: Pattern,
        head_index: u32,
        modifier_index: u32,
    ) -> PatternId {
        debug_assert!(
            pattern.relation.is_primary(),
            "bare pattern with non-primary relation {}",
            pattern.relation
        );
        PatternId(self.graph.add_node(PatternNode {
            pattern,
            head_index,
            modifier_index,
        }))
    }

    /// Add a combined pattern citing `mother` and `father`.
    pub fn add_combined(
        &mut self,
        pattern: Pattern,
        head_index: u32,
        modifier_index: u32,
        mother: PatternId,
        father: PatternId,
    ) -> PatternId {
        let idx = self.graph.add_node(PatternNode {
            pattern,
            head_index,
            modifier_index,
        });
        self.graph.add_edge(idx, mother.0, Lineage::Mother);
        self.graph.add_edge(idx, father.0, Lineage::Father);
        PatternId(idx)
    }

    pub fn node(&self, id: PatternId) -> &PatternNode {
        &self.graph[id.0]
    }

    pub fn pattern(&self, id: PatternId) -> &Pattern {
        &self.graph[id.0].pattern
    }

    pub fn mother(&self, id: PatternId) -> Option<PatternId> {
        self.ancestor(id, Lineage::Mother)
    }

    pub fn father(&self, id: PatternId) -> Option<PatternId> {
        self.ancestor(id, Lineage::Father)
    }

    /// True for patterns built directly from a triple.
    pub fn is_primary(&self, id: PatternId) -> bool {
        self.graph
            .edges_directed(id.0, Direction::Outgoing)
            .next()
            .is_none()
    }

    /// Number of combination hops behind a pattern: 0 for primaries.
    pub fn depth(&self, id: PatternId) -> usize {
        match (self.mother(id), self.father(id)) {
            (Some(m), Some(f)) => 1 + self.depth(m).max(self.depth(f)),
            (Some(a), None) | (None, Some(a)) => 1 + self.depth(a),
            (None, None) => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    fn ancestor(&self, id: PatternId, which: Lineage) -> Option<PatternId> {
        self.graph
            .edges_directed(id.0, Direction::Outgoing)
            .find(|edge| *edge.weight() == which)
            .map(|edge| PatternId(edge.target()))
    }
}
