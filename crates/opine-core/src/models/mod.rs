//! Oracle-facing data models.

pub mod dependency;
pub mod sentiment;

pub use dependency::{DependencyTriple, ParsedSentence, Token};
pub use sentiment::SentimentClass;
