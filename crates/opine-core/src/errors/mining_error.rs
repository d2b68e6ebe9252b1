//! Top-level mining errors.

use super::{ConfigError, OracleError, SentimentError, VocabularyError};

/// Errors that can occur while running the opinion miner.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("Sentiment error: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
