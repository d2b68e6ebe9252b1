//! # opine-core
//!
//! Foundation crate for the Opine opinion miner.
//! Defines the oracle-facing models, the `NlpOracle` trait, errors, config,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::OpineConfig;
pub use errors::{MiningError, OracleError, SentimentError, VocabularyError};
pub use models::{DependencyTriple, ParsedSentence, SentimentClass, Token};
pub use traits::NlpOracle;
