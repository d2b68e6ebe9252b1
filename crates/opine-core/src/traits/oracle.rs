use crate::errors::OracleError;
use crate::models::{ParsedSentence, SentimentClass};

/// The natural-language pipeline: sentence splitting, tagging, dependency
/// parsing, and sentiment classification. Every call blocks the caller.
pub trait NlpOracle: Send + Sync {
    /// Split raw text into ordered sentences.
    fn split_sentences(&self, text: &str) -> Result<Vec<String>, OracleError>;

    /// Parse one sentence into conjunction-collapsed dependency triples
    /// together with its whole-sentence sentiment class.
    fn parse_sentence(&self, sentence: &str) -> Result<ParsedSentence, OracleError>;

    /// Classify an arbitrary span of text.
    fn classify(&self, span: &str) -> Result<SentimentClass, OracleError>;

    /// Human-readable oracle name.
    fn name(&self) -> &str;
}

impl<T: NlpOracle + ?Sized> NlpOracle for std::sync::Arc<T> {
    fn split_sentences(&self, text: &str) -> Result<Vec<String>, OracleError> {
        (**self).split_sentences(text)
    }

    fn parse_sentence(&self, sentence: &str) -> Result<ParsedSentence, OracleError> {
        (**self).parse_sentence(sentence)
    }

    fn classify(&self, span: &str) -> Result<SentimentClass, OracleError> {
        (**self).classify(span)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
