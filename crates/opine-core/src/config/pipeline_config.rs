//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the per-document pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Lowercase input text before it reaches the oracle. Default: true.
    pub lowercase_input: Option<bool>,
    /// Parse sentences and score patterns on the rayon pool. Default: false.
    pub parallel: Option<bool>,
}

impl PipelineConfig {
    /// Returns whether input is lowercased, defaulting to true.
    pub fn effective_lowercase_input(&self) -> bool {
        self.lowercase_input.unwrap_or(true)
    }

    /// Returns whether oracle calls fan out in parallel, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
