//! Top-level Opine configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{OracleConfig, PipelineConfig, VocabularyConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`OPINE_*`)
/// 2. Project config (`opine.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OpineConfig {
    pub vocabulary: VocabularyConfig,
    pub oracle: OracleConfig,
    pub pipeline: PipelineConfig,
}

impl OpineConfig {
    /// Load configuration rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        tracing::debug!(root = %root.display(), "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &OpineConfig) -> Result<(), ConfigError> {
        if config.oracle.timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "oracle.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("vocabulary.stopwords_path", &config.vocabulary.stopwords_path),
            ("vocabulary.features_path", &config.vocabulary.features_path),
        ] {
            if value.as_deref().is_some_and(|p| p.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut OpineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: OpineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut OpineConfig, other: &OpineConfig) {
        if other.vocabulary.stopwords_path.is_some() {
            base.vocabulary.stopwords_path = other.vocabulary.stopwords_path.clone();
        }
        if other.vocabulary.features_path.is_some() {
            base.vocabulary.features_path = other.vocabulary.features_path.clone();
        }

        if other.oracle.timeout_ms.is_some() {
            base.oracle.timeout_ms = other.oracle.timeout_ms;
        }
        if other.oracle.failure_policy.is_some() {
            base.oracle.failure_policy = other.oracle.failure_policy;
        }

        if other.pipeline.lowercase_input.is_some() {
            base.pipeline.lowercase_input = other.pipeline.lowercase_input;
        }
        if other.pipeline.parallel.is_some() {
            base.pipeline.parallel = other.pipeline.parallel;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `OPINE_VOCABULARY_STOPWORDS_PATH`, `OPINE_ORACLE_TIMEOUT_MS`, etc.
    fn apply_env_overrides(config: &mut OpineConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("OPINE_VOCABULARY_STOPWORDS_PATH") {
            config.vocabulary.stopwords_path = Some(val);
        }
        if let Ok(val) = std::env::var("OPINE_VOCABULARY_FEATURES_PATH") {
            config.vocabulary.features_path = Some(val);
        }
        if let Ok(val) = std::env::var("OPINE_ORACLE_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.oracle.timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPINE_ORACLE_FAILURE_POLICY") {
            let policy = val.parse().map_err(|message| ConfigError::ValidationFailed {
                field: "oracle.failure_policy".to_string(),
                message,
            })?;
            config.oracle.failure_policy = Some(policy);
        }
        if let Ok(val) = std::env::var("OPINE_PIPELINE_LOWERCASE_INPUT") {
            if let Ok(v) = val.parse::<bool>() {
                config.pipeline.lowercase_input = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPINE_PIPELINE_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.pipeline.parallel = Some(v);
            }
        }
        Ok(())
    }
}
