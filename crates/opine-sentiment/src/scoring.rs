//! The scoring pass: classify each surviving pattern's phrase.

use opine_core::config::FailurePolicy;
use opine_core::errors::OracleError;
use opine_core::models::SentimentClass;
use opine_core::types::collections::FxHashMap;
use opine_core::NlpOracle;
use opine_extraction::{Pattern, PatternSet};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Sentiment class per pattern, keyed by pattern identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentAnnotations {
    classes: FxHashMap<Pattern, SentimentClass>,
}

impl SentimentAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pattern: Pattern, class: SentimentClass) {
        self.classes.insert(pattern, class);
    }

    pub fn get(&self, pattern: &Pattern) -> Option<SentimentClass> {
        self.classes.get(pattern).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, SentimentClass)> {
        self.classes.iter().map(|(p, c)| (p, *c))
    }
}

/// Annotations plus the failures tolerated under `FailurePolicy::Skip`.
#[derive(Debug, Clone, Default)]
pub struct ScoringOutcome {
    pub annotations: SentimentAnnotations,
    pub errors: Vec<OracleError>,
}

/// Classify `Pattern::to_phrase()` for every pattern in `patterns`.
///
/// Under `Abort` the first failure (in set order) is returned. Under `Skip`
/// the failing pattern is left unannotated and the error is collected.
pub fn score_patterns<O>(
    oracle: &O,
    patterns: &PatternSet,
    policy: FailurePolicy,
    parallel: bool,
) -> Result<ScoringOutcome, OracleError>
where
    O: NlpOracle + ?Sized,
{
    let classify = |pattern: &Pattern| oracle.classify(&pattern.to_phrase());

    let outcome = if parallel {
        let results: Vec<_> = patterns
            .as_slice()
            .par_iter()
            .map(|p| (p, classify(p)))
            .collect();
        collect_outcome(results, policy)?
    } else {
        collect_outcome(patterns.iter().map(|p| (p, classify(p))), policy)?
    };

    debug!(
        oracle = oracle.name(),
        scored = outcome.annotations.len(),
        skipped = outcome.errors.len(),
        "patterns scored"
    );
    Ok(outcome)
}

fn collect_outcome<'p, I>(results: I, policy: FailurePolicy) -> Result<ScoringOutcome, OracleError>
where
    I: IntoIterator<Item = (&'p Pattern, Result<SentimentClass, OracleError>)>,
{
    let mut outcome = ScoringOutcome::default();
    for (pattern, result) in results {
        match result {
            Ok(class) => outcome.annotations.insert(pattern.clone(), class),
            Err(err) => match policy {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::Skip => {
                    warn!(pattern = %pattern, error = %err, "pattern left unscored");
                    outcome.errors.push(err);
                }
            },
        }
    }
    Ok(outcome)
}
