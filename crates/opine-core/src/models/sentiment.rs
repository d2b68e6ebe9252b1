//! Five-way ordinal sentiment classes.

use serde::{Deserialize, Serialize};

/// Discrete sentiment class produced by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentClass {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentClass {
    /// All variants, most negative first.
    pub const ALL: [SentimentClass; 5] = [
        Self::VeryNegative,
        Self::Negative,
        Self::Neutral,
        Self::Positive,
        Self::VeryPositive,
    ];

    /// Added to the polarity so the most negative class scores 0.
    pub const SCORE_OFFSET: i8 = 2;

    /// Signed polarity, -2..=2.
    pub fn polarity(self) -> i8 {
        match self {
            Self::VeryNegative => -2,
            Self::Negative => -1,
            Self::Neutral => 0,
            Self::Positive => 1,
            Self::VeryPositive => 2,
        }
    }

    /// Non-negative score, 0.0..=4.0.
    pub fn score(self) -> f64 {
        f64::from(self.polarity() + Self::SCORE_OFFSET)
    }

    /// Class for a signed polarity, if in range.
    pub fn from_polarity(polarity: i8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.polarity() == polarity)
    }

    /// Class for a 0-based ordinal index (the usual 0..=4 model output).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_positive(self) -> bool {
        self.polarity() > 0
    }

    pub fn is_negative(self) -> bool {
        self.polarity() < 0
    }
}
