//! A deterministic `NlpOracle` that replays golden scripts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use opine_core::errors::{OracleError, OracleOperation};
use opine_core::models::{ParsedSentence, SentimentClass};
use opine_core::types::collections::{FxHashMap, FxHashSet};
use opine_core::NlpOracle;

use crate::script::OracleScript;

/// Scripted oracle. Sentences are split on `.`, `!` and `?`; parses and
/// phrase classes come from the loaded scripts. Unscripted sentences are
/// unavailable; unscripted phrases classify as neutral.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    parses: FxHashMap<String, ParsedSentence>,
    phrases: FxHashMap<String, SentimentClass>,
    failing_sentences: FxHashSet<String>,
    failing_phrases: FxHashSet<String>,
    fail_split: bool,
    delay: Option<Duration>,
    parse_calls: AtomicUsize,
    classify_calls: AtomicUsize,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle answering for the named golden scripts.
    pub fn load(names: &[&str]) -> Self {
        names
            .iter()
            .fold(Self::new(), |oracle, name| oracle.with_script(&crate::load_script(name)))
    }

    pub fn with_script(mut self, script: &OracleScript) -> Self {
        for sentence in &script.sentences {
            self.parses
                .insert(sentence.text.trim().to_string(), sentence.clone());
        }
        self.phrases
            .extend(script.phrases.iter().map(|(k, v)| (k.clone(), *v)));
        self
    }

    pub fn with_phrase(mut self, phrase: &str, class: SentimentClass) -> Self {
        self.phrases.insert(phrase.to_string(), class);
        self
    }

    /// Make `parse_sentence` fail for this sentence.
    pub fn failing_sentence(mut self, sentence: &str) -> Self {
        self.failing_sentences.insert(sentence.trim().to_string());
        self
    }

    /// Make `classify` fail for this phrase.
    pub fn failing_phrase(mut self, phrase: &str) -> Self {
        self.failing_phrases.insert(phrase.to_string());
        self
    }

    /// Make `split_sentences` fail.
    pub fn failing_split(mut self) -> Self {
        self.fail_split = true;
        self
    }

    /// Sleep this long inside every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn parse_calls(&self) -> usize {
        self.parse_calls.load(Ordering::SeqCst)
    }

    pub fn classify_calls(&self) -> usize {
        self.classify_calls.load(Ordering::SeqCst)
    }

    fn pause(&self) {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
    }
}

impl NlpOracle for ScriptedOracle {
    fn split_sentences(&self, text: &str) -> Result<Vec<String>, OracleError> {
        self.pause();
        if self.fail_split {
            return Err(OracleError::unavailable(
                OracleOperation::SplitSentences,
                "scripted failure",
            ));
        }

        let mut sentences = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            current.push(ch);
            if matches!(ch, '.' | '!' | '?') {
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }
        push_trimmed(&mut sentences, &current);
        Ok(sentences)
    }

    fn parse_sentence(&self, sentence: &str) -> Result<ParsedSentence, OracleError> {
        self.parse_calls.fetch_add(1, Ordering::SeqCst);
        self.pause();
        let key = sentence.trim();
        if self.failing_sentences.contains(key) {
            return Err(OracleError::unavailable(
                OracleOperation::ParseSentence,
                format!("scripted failure for {key:?}"),
            ));
        }
        self.parses.get(key).cloned().ok_or_else(|| {
            OracleError::unavailable(
                OracleOperation::ParseSentence,
                format!("no scripted parse for {key:?}"),
            )
        })
    }

    fn classify(&self, span: &str) -> Result<SentimentClass, OracleError> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        self.pause();
        if self.failing_phrases.contains(span) {
            return Err(OracleError::unavailable(
                OracleOperation::Classify,
                format!("scripted failure for {span:?}"),
            ));
        }
        Ok(self
            .phrases
            .get(span)
            .copied()
            .unwrap_or(SentimentClass::Neutral))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
