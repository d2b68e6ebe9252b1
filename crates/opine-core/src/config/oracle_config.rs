//! Oracle configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What to do when an oracle call fails for one sentence or pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the whole run with the oracle error.
    #[default]
    Abort,
    /// Record the error, skip the sentence (or leave the pattern unscored), continue.
    Skip,
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown failure policy '{other}'")),
        }
    }
}

/// Configuration for calls into the NLP oracle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OracleConfig {
    /// Per-call timeout in milliseconds. Unset means calls are unbounded.
    pub timeout_ms: Option<u64>,
    /// Failure handling. Default: abort.
    pub failure_policy: Option<FailurePolicy>,
}

impl OracleConfig {
    /// Returns the per-call timeout, if one is configured.
    pub fn effective_timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Returns the effective failure policy, defaulting to `Abort`.
    pub fn effective_failure_policy(&self) -> FailurePolicy {
        self.failure_policy.unwrap_or_default()
    }
}
