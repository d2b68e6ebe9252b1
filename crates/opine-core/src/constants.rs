/// Number of compounding combination rounds run per sentence.
pub const COMBINATION_ROUNDS: usize = 3;

/// Default stopword vocabulary file.
pub const DEFAULT_STOPWORDS_PATH: &str = "stopwords.txt";

/// Default requirement/feature vocabulary file.
pub const DEFAULT_FEATURES_PATH: &str = "requirementWords.txt";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "opine.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "OPINE_LOG";
