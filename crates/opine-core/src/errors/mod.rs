//! Error handling for Opine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod mining_error;
pub mod oracle_error;
pub mod sentiment_error;
pub mod vocabulary_error;

pub use config_error::ConfigError;
pub use mining_error::MiningError;
pub use oracle_error::{OracleError, OracleOperation};
pub use sentiment_error::SentimentError;
pub use vocabulary_error::VocabularyError;
