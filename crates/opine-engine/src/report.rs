//! Result of one `OpinionMiner::run`.

use opine_core::errors::{MiningError, SentimentError};
use opine_core::models::SentimentClass;
use opine_extraction::{Pattern, PatternSet};
use opine_sentiment::{SentimentAggregate, SentimentAnnotations};

/// Patterns, their sentiment, and this run's sentence aggregate.
#[derive(Debug, Default)]
pub struct MiningReport {
    /// Surviving patterns of every sentence, in first-occurrence order.
    pub patterns: PatternSet,
    pub annotations: SentimentAnnotations,
    /// Sentence scores of this run only.
    pub sentiment: SentimentAggregate,
    /// Non-fatal failures tolerated under the skip policy.
    pub errors: Vec<MiningError>,
}

impl MiningReport {
    /// Each pattern with its class, or `None` when scoring was skipped.
    pub fn scored(&self) -> impl Iterator<Item = (&Pattern, Option<SentimentClass>)> + '_ {
        self.patterns
            .iter()
            .map(|pattern| (pattern, self.annotations.get(pattern)))
    }

    pub fn overall_sentiment(&self) -> Result<f64, SentimentError> {
        self.sentiment.overall()
    }

    /// True if no sentence or pattern was skipped.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}
