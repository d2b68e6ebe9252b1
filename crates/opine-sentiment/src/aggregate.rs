//! Running sum of sentence scores.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use opine_core::errors::SentimentError;
use opine_core::models::SentimentClass;
use serde::{Deserialize, Serialize};

/// Sum of sentence scores and the number of sentences recorded.
///
/// Scores are `class.score()`, so a single sentence contributes 0.0..=4.0.
/// Aggregates from separate runs combine by addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentAggregate {
    sum: f64,
    sentence_count: usize,
}

impl SentimentAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, class: SentimentClass) {
        self.sum += class.score();
        self.sentence_count += 1;
    }

    pub fn merge(&mut self, other: &SentimentAggregate) {
        self.sum += other.sum;
        self.sentence_count += other.sentence_count;
    }

    /// Mean sentence score.
    pub fn overall(&self) -> Result<f64, SentimentError> {
        if self.sentence_count == 0 {
            return Err(SentimentError::EmptyCorpus);
        }
        Ok(self.sum / self.sentence_count as f64)
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn is_empty(&self) -> bool {
        self.sentence_count == 0
    }
}

impl Add for SentimentAggregate {
    type Output = SentimentAggregate;

    fn add(mut self, rhs: SentimentAggregate) -> SentimentAggregate {
        self.merge(&rhs);
        self
    }
}

impl AddAssign for SentimentAggregate {
    fn add_assign(&mut self, rhs: SentimentAggregate) {
        self.merge(&rhs);
    }
}

impl Sum for SentimentAggregate {
    fn sum<I: Iterator<Item = SentimentAggregate>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl FromIterator<SentimentClass> for SentimentAggregate {
    fn from_iter<I: IntoIterator<Item = SentimentClass>>(iter: I) -> Self {
        let mut aggregate = Self::new();
        for class in iter {
            aggregate.record(class);
        }
        aggregate
    }
}
