//! Sentiment aggregation errors.

/// Errors raised by the sentiment aggregate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SentimentError {
    #[error("Overall sentiment requested before any sentence was processed")]
    EmptyCorpus,
}
