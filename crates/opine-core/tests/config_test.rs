//! Tests for the Opine configuration system.

use std::sync::Mutex;

use opine_core::config::{FailurePolicy, OpineConfig};
use opine_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all OPINE_ env vars to prevent cross-test contamination.
fn clear_opine_env_vars() {
    for key in [
        "OPINE_VOCABULARY_STOPWORDS_PATH",
        "OPINE_VOCABULARY_FEATURES_PATH",
        "OPINE_ORACLE_TIMEOUT_MS",
        "OPINE_ORACLE_FAILURE_POLICY",
        "OPINE_PIPELINE_LOWERCASE_INPUT",
        "OPINE_PIPELINE_PARALLEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_compiled_defaults() {
    let config = OpineConfig::from_toml("").unwrap();

    assert_eq!(config.vocabulary.effective_stopwords_path(), "stopwords.txt");
    assert_eq!(
        config.vocabulary.effective_features_path(),
        "requirementWords.txt"
    );
    assert_eq!(config.oracle.effective_timeout(), None);
    assert_eq!(
        config.oracle.effective_failure_policy(),
        FailurePolicy::Abort
    );
    assert!(config.pipeline.effective_lowercase_input());
    assert!(!config.pipeline.effective_parallel());
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let toml = r#"
[vocabulary]
features_path = "vocab/features.txt"

[oracle]
timeout_ms = 2500
failure_policy = "skip"
"#;
    let config = OpineConfig::from_toml(toml).unwrap();
    assert_eq!(config.vocabulary.effective_features_path(), "vocab/features.txt");
    assert_eq!(config.vocabulary.effective_stopwords_path(), "stopwords.txt");
    assert_eq!(
        config.oracle.effective_timeout(),
        Some(std::time::Duration::from_millis(2500))
    );
    assert_eq!(config.oracle.effective_failure_policy(), FailurePolicy::Skip);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = OpineConfig::from_toml("[oracle\ntimeout_ms = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_timeout_fails_validation() {
    let config = OpineConfig::from_toml("[oracle]\ntimeout_ms = 0\n").unwrap();
    let err = OpineConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "oracle.timeout_ms"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_vocabulary_path_fails_validation() {
    let config = OpineConfig::from_toml("[vocabulary]\nstopwords_path = \"  \"\n").unwrap();
    assert!(OpineConfig::validate(&config).is_err());
}

#[test]
fn load_without_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_opine_env_vars();

    let dir = tempdir();
    let config = OpineConfig::load(dir.path()).unwrap();
    assert_eq!(config.vocabulary.effective_stopwords_path(), "stopwords.txt");
    assert!(!config.pipeline.effective_parallel());
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_opine_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("opine.toml"),
        r#"
[oracle]
timeout_ms = 1000

[pipeline]
parallel = true
"#,
    )
    .unwrap();

    std::env::set_var("OPINE_ORACLE_TIMEOUT_MS", "4000");
    std::env::set_var("OPINE_ORACLE_FAILURE_POLICY", "skip");

    let config = OpineConfig::load(dir.path()).unwrap();
    assert_eq!(config.oracle.timeout_ms, Some(4000));
    assert_eq!(config.oracle.failure_policy, Some(FailurePolicy::Skip));
    // Not overridden by env
    assert_eq!(config.pipeline.parallel, Some(true));

    clear_opine_env_vars();
}

#[test]
fn unknown_failure_policy_in_env_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_opine_env_vars();

    let dir = tempdir();
    std::env::set_var("OPINE_ORACLE_FAILURE_POLICY", "retry");
    let result = OpineConfig::load(dir.path());
    clear_opine_env_vars();

    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn malformed_project_file_reports_its_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_opine_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("opine.toml"), "[pipeline\n").unwrap();
    match OpineConfig::load(dir.path()) {
        Err(ConfigError::ParseError { path, .. }) => assert!(path.ends_with("opine.toml")),
        other => panic!("expected parse error, got {other:?}"),
    }
}
