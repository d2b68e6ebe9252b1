//! Golden document scripts: the oracle's answers for one input text.

use std::collections::BTreeMap;

use opine_core::models::{ParsedSentence, SentimentClass};
use serde::Deserialize;

/// One golden document.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleScript {
    pub name: String,
    /// Raw input, already lowercased.
    pub text: String,
    /// Parse for every sentence of `text`, in order.
    pub sentences: Vec<ParsedSentence>,
    /// Class for each synthesized phrase; unlisted phrases are neutral.
    #[serde(default)]
    pub phrases: BTreeMap<String, SentimentClass>,
    #[serde(default)]
    pub stopwords: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Pairs the miner is expected to report, in order.
    #[serde(default)]
    pub expected: Vec<ExpectedPair>,
}

/// An expected surviving aspect-opinion pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpectedPair {
    pub aspect: String,
    pub opinion: String,
    pub relation: String,
    #[serde(default)]
    pub sentiment: Option<SentimentClass>,
}
