//! Oracle wrapper that enforces a per-call deadline.
//!
//! Each call runs on its own worker thread and reports back over a
//! crossbeam-channel bounded(1). The caller waits with `recv_timeout`; on
//! expiry the worker is abandoned and its late result is dropped.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError};
use opine_core::config::OracleConfig;
use opine_core::errors::{OracleError, OracleOperation};
use opine_core::models::{ParsedSentence, SentimentClass};
use opine_core::NlpOracle;
use tracing::warn;

/// Wraps an oracle so that no call blocks longer than `timeout`.
#[derive(Debug)]
pub struct BoundedOracle<O> {
    inner: Arc<O>,
    timeout: Duration,
}

impl<O: NlpOracle + 'static> BoundedOracle<O> {
    pub fn new(inner: O, timeout: Duration) -> Self {
        Self::from_arc(Arc::new(inner), timeout)
    }

    pub fn from_arc(inner: Arc<O>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    fn call<T, F>(&self, operation: OracleOperation, f: F) -> Result<T, OracleError>
    where
        T: Send + 'static,
        F: FnOnce(&O) -> Result<T, OracleError> + Send + 'static,
    {
        let (tx, rx) = bounded(1);
        let inner = Arc::clone(&self.inner);

        thread::Builder::new()
            .name(format!("opine-oracle-{operation}"))
            .spawn(move || {
                // The receiver is gone if the caller already timed out.
                let _ = tx.send(f(&inner));
            })
            .map_err(|e| OracleError::unavailable(operation, e.to_string()))?;

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                warn!(oracle = self.inner.name(), %operation, timeout_ms, "oracle call timed out");
                Err(OracleError::Timeout {
                    operation,
                    timeout_ms,
                })
            }
            Err(RecvTimeoutError::Disconnected) => Err(OracleError::unavailable(
                operation,
                "oracle worker exited without a result",
            )),
        }
    }
}

impl<O: NlpOracle + 'static> NlpOracle for BoundedOracle<O> {
    fn split_sentences(&self, text: &str) -> Result<Vec<String>, OracleError> {
        let text = text.to_string();
        self.call(OracleOperation::SplitSentences, move |o| {
            o.split_sentences(&text)
        })
    }

    fn parse_sentence(&self, sentence: &str) -> Result<ParsedSentence, OracleError> {
        let sentence = sentence.to_string();
        self.call(OracleOperation::ParseSentence, move |o| {
            o.parse_sentence(&sentence)
        })
    }

    fn classify(&self, span: &str) -> Result<SentimentClass, OracleError> {
        let span = span.to_string();
        self.call(OracleOperation::Classify, move |o| o.classify(&span))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Apply the configured timeout, if any, behind a shared trait object.
pub fn apply_timeout<O: NlpOracle + 'static>(
    oracle: O,
    config: &OracleConfig,
) -> Arc<dyn NlpOracle> {
    match config.effective_timeout() {
        Some(timeout) => Arc::new(BoundedOracle::new(oracle, timeout)),
        None => Arc::new(oracle),
    }
}
