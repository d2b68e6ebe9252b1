//! Vocabulary loading errors. Always fatal at initialization.

/// Errors raised while reading a stopword or feature vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("Vocabulary file not found: {path}")]
    NotFound { path: String },

    #[error("Vocabulary file {path} could not be read: {message}")]
    Unreadable { path: String, message: String },
}

impl VocabularyError {
    /// Classify an I/O failure for `path`.
    pub fn from_io(path: &str, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_string(),
            },
            _ => Self::Unreadable {
                path: path.to_string(),
                message: err.to_string(),
            },
        }
    }
}
