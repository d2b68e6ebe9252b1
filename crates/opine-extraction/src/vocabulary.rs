//! Stopword and requirement/feature vocabularies.

use std::path::Path;

use opine_core::config::VocabularyConfig;
use opine_core::errors::VocabularyError;
use opine_core::types::collections::FxHashSet;
use tracing::info;

/// The two word lists that drive pruning.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    stopwords: FxHashSet<String>,
    /// Stored lowercased; lookups are case-insensitive.
    features: FxHashSet<String>,
}

impl Vocabulary {
    pub fn new<S, F>(stopwords: S, features: F) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
            features: features
                .into_iter()
                .map(|w| w.into().to_lowercase())
                .collect(),
        }
    }

    /// Load both lists from the configured paths.
    pub fn load(config: &VocabularyConfig) -> Result<Self, VocabularyError> {
        Self::load_from_paths(
            Path::new(config.effective_stopwords_path()),
            Path::new(config.effective_features_path()),
        )
    }

    pub fn load_from_paths(stopwords: &Path, features: &Path) -> Result<Self, VocabularyError> {
        let vocabulary = Self::new(read_word_list(stopwords)?, read_word_list(features)?);
        info!(
            stopwords = vocabulary.stopword_count(),
            features = vocabulary.feature_count(),
            "vocabulary loaded"
        );
        Ok(vocabulary)
    }

    /// Exact match against the stopword list.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Case-insensitive match against the feature list.
    pub fn is_feature(&self, word: &str) -> bool {
        self.features.contains(&word.to_lowercase())
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

/// Read a one-token-per-line file. Lines are trimmed; blank lines and
/// `#` comments are skipped. Multi-word entries ("battery life") are kept whole.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, VocabularyError> {
    let display = path.display().to_string();
    let content =
        std::fs::read_to_string(path).map_err(|e| VocabularyError::from_io(&display, &e))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
