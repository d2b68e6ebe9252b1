//! Tokens, typed dependency triples, and parsed sentences.

use serde::{Deserialize, Serialize};

use super::SentimentClass;

/// A tagged word at a fixed position of its sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub word: String,
    /// Part-of-speech tag (Penn Treebank).
    pub tag: String,
    /// 1-based position in the sentence.
    pub index: u32,
}

impl Token {
    pub fn new(word: impl Into<String>, tag: impl Into<String>, index: u32) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
            index,
        }
    }
}

/// One edge of a conjunction-collapsed dependency parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyTriple {
    /// Grammatical relation label, e.g. `nsubj`, `amod`, `conj_and`.
    pub relation: String,
    pub governor: Token,
    pub dependent: Token,
}

impl DependencyTriple {
    pub fn new(relation: impl Into<String>, governor: Token, dependent: Token) -> Self {
        Self {
            relation: relation.into(),
            governor,
            dependent,
        }
    }
}

/// Everything the oracle knows about one sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub text: String,
    pub dependencies: Vec<DependencyTriple>,
    pub sentiment: SentimentClass,
}
