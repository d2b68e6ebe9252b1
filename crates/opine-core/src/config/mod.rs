//! Configuration system for Opine.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod opine_config;
pub mod oracle_config;
pub mod pipeline_config;
pub mod vocabulary_config;

pub use opine_config::OpineConfig;
pub use oracle_config::{FailurePolicy, OracleConfig};
pub use pipeline_config::PipelineConfig;
pub use vocabulary_config::VocabularyConfig;
