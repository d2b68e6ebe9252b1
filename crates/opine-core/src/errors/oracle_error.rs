//! NLP oracle errors.

use std::fmt;

/// The oracle call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleOperation {
    SplitSentences,
    ParseSentence,
    Classify,
}

impl fmt::Display for OracleOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SplitSentences => "split_sentences",
            Self::ParseSentence => "parse_sentence",
            Self::Classify => "classify",
        };
        f.write_str(name)
    }
}

/// Failures of the external parsing/classification pipeline.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OracleError {
    #[error("Oracle unavailable during {operation}: {reason}")]
    Unavailable {
        operation: OracleOperation,
        reason: String,
    },

    #[error("Oracle {operation} timed out after {timeout_ms}ms")]
    Timeout {
        operation: OracleOperation,
        timeout_ms: u64,
    },
}

impl OracleError {
    /// Shorthand for an `Unavailable` error.
    pub fn unavailable(operation: OracleOperation, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            operation,
            reason: reason.into(),
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> OracleOperation {
        match self {
            Self::Unavailable { operation, .. } | Self::Timeout { operation, .. } => *operation,
        }
    }
}
