use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::prompt::PromptError;

/// Library-wide error type for vibe operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The completion-service credential is not set.
    #[error("{var} environment variable not set")]
    MissingCredential { var: String },

    /// Product description or tools list file does not exist.
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Product description or tools list file exists but cannot be read.
    #[error("Failed to read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Guidelines template file does not exist and the fallback is disabled.
    #[error("Guidelines template not found: {}", .0.display())]
    GuidelinesNotFound(PathBuf),

    /// Guidelines template file exists but cannot be read.
    #[error("Failed to read guidelines template {}: {source}", path.display())]
    GuidelinesUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Prompt template rendering failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The completion service call failed.
    #[error("Completion request failed: {0}")]
    Completion(#[from] CompletionError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Failure reported by a completion client.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Network or HTTP client failure before a response arrived.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The service answered 429.
    #[error("Rate limited (429)")]
    RateLimited,

    /// Non-success status other than 429.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),

    /// The response contained no generated text.
    #[error("No completion text in response")]
    EmptyResponse,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on not-found conditions.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err)
            | AppError::InputUnreadable { source: err, .. }
            | AppError::GuidelinesUnreadable { source: err, .. } => err.kind(),
            AppError::InputNotFound(_) | AppError::GuidelinesNotFound(_) => io::ErrorKind::NotFound,
            AppError::Configuration(_)
            | AppError::MissingCredential { .. }
            | AppError::Prompt(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Completion(_) => io::ErrorKind::Other,
        }
    }
}
