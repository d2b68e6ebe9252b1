//! The opinion-mining facade.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use opine_core::config::{FailurePolicy, OpineConfig};
use opine_core::errors::{MiningError, OracleError, SentimentError};
use opine_core::models::SentimentClass;
use opine_core::NlpOracle;
use opine_extraction::{SentenceOutcome, SentenceProcessor, Vocabulary};
use opine_sentiment::{score_patterns, SentimentAggregate};
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use crate::bounded::apply_timeout;
use crate::report::MiningReport;

/// A sentence after parsing and extraction.
type SentenceResult = Result<(SentenceOutcome, SentimentClass), OracleError>;

/// Owns the vocabulary and the oracle, and accumulates sentence sentiment
/// across runs.
pub struct OpinionMiner<O> {
    config: OpineConfig,
    vocabulary: Vocabulary,
    oracle: O,
    aggregate: SentimentAggregate,
}

impl<O: NlpOracle> OpinionMiner<O> {
    pub fn new(oracle: O, vocabulary: Vocabulary, config: OpineConfig) -> Self {
        Self {
            config,
            vocabulary,
            oracle,
            aggregate: SentimentAggregate::new(),
        }
    }

    /// Validate `config` and load the vocabulary files it names.
    pub fn from_config(oracle: O, config: OpineConfig) -> Result<Self, MiningError> {
        OpineConfig::validate(&config)?;
        let vocabulary = Vocabulary::load(&config.vocabulary)?;
        Ok(Self::new(oracle, vocabulary, config))
    }

    /// Mine `text`: split, parse and extract per sentence, then score the
    /// document's surviving patterns.
    ///
    /// The cumulative aggregate is updated only when the run succeeds.
    pub fn run(&mut self, text: &str) -> Result<MiningReport, MiningError> {
        let span = info_span!("opine.run", oracle = self.oracle.name(), chars = text.len());
        let _guard = span.enter();

        let policy = self.config.oracle.effective_failure_policy();
        let parallel = self.config.pipeline.effective_parallel();

        let input: Cow<'_, str> = if self.config.pipeline.effective_lowercase_input() {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };

        let sentences = self.oracle.split_sentences(&input)?;
        let processor = SentenceProcessor::new(&self.vocabulary);
        let oracle = &self.oracle;
        let extract = |sentence: &String| -> SentenceResult {
            let parsed = oracle.parse_sentence(sentence)?;
            Ok((processor.process(&parsed.dependencies), parsed.sentiment))
        };

        let mut report = MiningReport::default();
        if parallel {
            let results: Vec<SentenceResult> = sentences.par_iter().map(extract).collect();
            absorb(&mut report, results, policy)?;
        } else {
            absorb(&mut report, sentences.iter().map(extract), policy)?;
        }

        let scoring = score_patterns(&self.oracle, &report.patterns, policy, parallel)?;
        report.annotations = scoring.annotations;
        report
            .errors
            .extend(scoring.errors.into_iter().map(MiningError::from));

        self.aggregate += report.sentiment;

        info!(
            sentences = sentences.len(),
            survivor_count = report.patterns.len(),
            scored = report.annotations.len(),
            skipped = report.errors.len(),
            "run complete"
        );
        Ok(report)
    }

    /// Mean sentence score over every successful run so far.
    pub fn overall_sentiment(&self) -> Result<f64, SentimentError> {
        self.aggregate.overall()
    }

    pub fn aggregate(&self) -> &SentimentAggregate {
        &self.aggregate
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &OpineConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

impl OpinionMiner<Arc<dyn NlpOracle>> {
    /// Resolve configuration from `root` (project `opine.toml`, then `OPINE_*`
    /// environment), bound the oracle by the configured timeout, and load the
    /// vocabulary. Relative vocabulary paths resolve against `root`.
    pub fn open<T: NlpOracle + 'static>(oracle: T, root: &Path) -> Result<Self, MiningError> {
        let config = OpineConfig::load(root)?;
        let vocabulary = Vocabulary::load_from_paths(
            &resolve(root, config.vocabulary.effective_stopwords_path()),
            &resolve(root, config.vocabulary.effective_features_path()),
        )?;
        let oracle = apply_timeout(oracle, &config.oracle);
        Ok(Self::new(oracle, vocabulary, config))
    }

    /// Like `from_config`, with the configured timeout applied to `oracle`.
    pub fn bounded<T: NlpOracle + 'static>(
        oracle: T,
        config: OpineConfig,
    ) -> Result<Self, MiningError> {
        let oracle = apply_timeout(oracle, &config.oracle);
        Self::from_config(oracle, config)
    }
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Fold per-sentence results into `report` in sentence order.
fn absorb<I>(
    report: &mut MiningReport,
    results: I,
    policy: FailurePolicy,
) -> Result<(), MiningError>
where
    I: IntoIterator<Item = SentenceResult>,
{
    for (sentence_index, result) in results.into_iter().enumerate() {
        match result {
            Ok((outcome, sentiment)) => {
                debug!(
                    sentence_index,
                    primary_count = outcome.primary_count,
                    combined_count = outcome.combined_count,
                    survivor_count = outcome.patterns.len(),
                    "sentence mined"
                );
                report.patterns.union(outcome.patterns);
                report.sentiment.record(sentiment);
            }
            Err(err) => match policy {
                FailurePolicy::Abort => return Err(err.into()),
                FailurePolicy::Skip => {
                    warn!(sentence_index, error = %err, "sentence skipped");
                    report.errors.push(err.into());
                }
            },
        }
    }
    Ok(())
}
