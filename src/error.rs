use thiserror::Error;

/// Unified error type for cz-emoji operations
#[derive(Error, Debug)]
pub enum CzEmojiError {
    /// A prompt answer was rejected; the host should ask again.
    #[error("{0}")]
    Validation(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in cz-emoji
pub type Result<T> = std::result::Result<T, CzEmojiError>;

impl CzEmojiError {
    /// Create a validation error carrying the message shown to the user
    pub fn validation(msg: impl Into<String>) -> Self {
        CzEmojiError::Validation(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CzEmojiError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        CzEmojiError::Version(msg.into())
    }

    /// Whether the host can recover by asking the same question again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CzEmojiError::Validation(_))
    }
}
