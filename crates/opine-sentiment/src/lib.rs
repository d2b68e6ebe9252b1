//! # opine-sentiment
//!
//! Sentence-level sentiment aggregation and the pattern scoring pass.
//! Extraction never touches sentiment; scores live beside the pattern set.

pub mod aggregate;
pub mod scoring;

pub use aggregate::SentimentAggregate;
pub use scoring::{score_patterns, ScoringOutcome, SentimentAnnotations};
