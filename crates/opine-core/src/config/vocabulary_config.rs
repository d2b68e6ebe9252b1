//! Vocabulary configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FEATURES_PATH, DEFAULT_STOPWORDS_PATH};

/// Locations of the two vocabulary files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Stopword list, one token per line. Default: `stopwords.txt`.
    pub stopwords_path: Option<String>,
    /// Requirement/feature word list, one token per line. Default: `requirementWords.txt`.
    pub features_path: Option<String>,
}

impl VocabularyConfig {
    /// Returns the effective stopword path.
    pub fn effective_stopwords_path(&self) -> &str {
        self.stopwords_path.as_deref().unwrap_or(DEFAULT_STOPWORDS_PATH)
    }

    /// Returns the effective feature-word path.
    pub fn effective_features_path(&self) -> &str {
        self.features_path.as_deref().unwrap_or(DEFAULT_FEATURES_PATH)
    }
}
