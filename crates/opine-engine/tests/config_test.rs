//! Building miners from configuration: vocabulary files, project config, timeouts.

use std::fs;
use std::time::Duration;

use opine_core::config::OpineConfig;
use opine_core::errors::{
    ConfigError, MiningError, OracleError, OracleOperation, VocabularyError,
};
use opine_core::NlpOracle;
use opine_engine::OpinionMiner;
use tempfile::TempDir;
use test_fixtures::{fixture_path, load_script, ScriptedOracle};

fn fixture_vocabulary(config: &mut OpineConfig) {
    config.vocabulary.stopwords_path = Some(
        fixture_path("vocabulary/stopwords.txt")
            .to_string_lossy()
            .into_owned(),
    );
    config.vocabulary.features_path = Some(
        fixture_path("vocabulary/requirementWords.txt")
            .to_string_lossy()
            .into_owned(),
    );
}

#[test]
fn from_config_loads_vocabulary_files() {
    let mut config = OpineConfig::default();
    fixture_vocabulary(&mut config);

    let mut miner =
        OpinionMiner::from_config(ScriptedOracle::load(&["laptop_review"]), config).unwrap();
    assert!(miner.vocabulary().is_feature("Battery Life"));
    assert!(miner.vocabulary().is_stopword("the"));

    let report = miner.run(&load_script("laptop_review").text).unwrap();
    assert_eq!(report.patterns.len(), 2);
}

#[test]
fn missing_vocabulary_is_fatal_at_construction() {
    let dir = TempDir::new().unwrap();
    let mut config = OpineConfig::default();
    let missing = dir.path().join("nope.txt").to_string_lossy().into_owned();
    config.vocabulary.stopwords_path = Some(missing.clone());
    config.vocabulary.features_path = Some(missing);

    let err = OpinionMiner::from_config(ScriptedOracle::new(), config).err().unwrap();
    assert!(matches!(err, MiningError::Vocabulary(VocabularyError::NotFound { .. })));
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = OpineConfig::default();
    fixture_vocabulary(&mut config);
    config.oracle.timeout_ms = Some(0);

    let err = OpinionMiner::from_config(ScriptedOracle::new(), config).err().unwrap();
    assert!(matches!(err, MiningError::Config(ConfigError::ValidationFailed { .. })));
}

#[test]
fn open_reads_project_config_and_relative_vocabulary() {
    let dir = TempDir::new().unwrap();
    let script = load_script("laptop_review");
    fs::write(dir.path().join("stop.txt"), script.stopwords.join("\n")).unwrap();
    fs::write(dir.path().join("features.txt"), script.features.join("\n")).unwrap();
    fs::write(
        dir.path().join("opine.toml"),
        r#"
[vocabulary]
stopwords_path = "stop.txt"
features_path = "features.txt"

[oracle]
timeout_ms = 5000
"#,
    )
    .unwrap();

    let mut miner =
        OpinionMiner::open(ScriptedOracle::load(&["laptop_review"]), dir.path()).unwrap();
    assert_eq!(miner.config().oracle.effective_timeout(), Some(Duration::from_secs(5)));
    assert_eq!(miner.oracle().name(), "scripted");

    let report = miner.run(&script.text).unwrap();
    assert_eq!(report.patterns.len(), 2);
}

#[test]
fn slow_oracle_times_out() {
    let mut config = OpineConfig::default();
    fixture_vocabulary(&mut config);
    config.oracle.timeout_ms = Some(25);

    let oracle = ScriptedOracle::load(&["laptop_review"]).with_delay(Duration::from_millis(500));
    let mut miner = OpinionMiner::bounded(oracle, config).unwrap();

    let err = miner.run(&load_script("laptop_review").text).unwrap_err();
    match err {
        MiningError::Oracle(OracleError::Timeout {
            operation,
            timeout_ms,
        }) => {
            assert_eq!(operation, OracleOperation::SplitSentences);
            assert_eq!(timeout_ms, 25);
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}
