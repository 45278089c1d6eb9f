//! Error types for toolchat.

use thiserror::Error;

/// Primary error type for all toolchat operations.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("OpenAI API key not found. Please set it in your .env file.")]
    MissingCredential,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Agent stopped after {0} model turns without a final answer")]
    IterationLimit(usize),
}

impl ChatError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this is the missing-credential condition.
    ///
    /// The binary treats it as a normal shutdown (exit status 0) rather than
    /// a failure.
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ChatError>;
