//! # opine-extraction
//!
//! Turns the dependency triples of one sentence into aspect-opinion patterns.
//! Primary patterns come from single triples, up to three compounding rounds
//! merge them into multi-hop patterns, and pruning drops superseded ancestors,
//! stopword patterns, and patterns outside the feature vocabulary.

pub mod builder;
pub mod combiner;
pub mod lineage;
pub mod pattern;
pub mod pattern_set;
pub mod pruner;
pub mod sentence;
pub mod taxonomy;
pub mod vocabulary;

pub use builder::PatternBuilder;
pub use combiner::{CombinationRounds, Combiner};
pub use lineage::{LineageGraph, PatternId, PatternNode};
pub use pattern::Pattern;
pub use pattern_set::PatternSet;
pub use pruner::{PruneOutcome, PruneStats, Pruner};
pub use sentence::{SentenceOutcome, SentenceProcessor};
pub use taxonomy::RelationKind;
pub use vocabulary::Vocabulary;
