use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// None of these variants is fatal to a conversation: validation errors reject the
/// input, transport errors are absorbed by the fallback reply and capability errors
/// only disable the matching affordance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Rejected input: empty text, a reply still in flight, or a mood already chosen.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote backend was unreachable, answered with a non-success status,
    /// or sent a payload that could not be decoded.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Speech synthesis or recognition is not available on this host.
    #[error("Unsupported capability: {0}")]
    UnsupportedCapability(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the transport adapter should answer this error with the local fallback.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Timeout(_))
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transport(format!("Malformed payload: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("HTTP request timed out: {}", err))
        } else {
            AppError::Transport(format!("HTTP error: {}", err))
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for AppError {
    fn from(err: tokio::sync::mpsc::error::SendError<T>) -> Self {
        AppError::Internal(format!("Session actor unavailable: {}", err))
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for AppError {
    fn from(err: tokio::sync::oneshot::error::RecvError) -> Self {
        AppError::Internal(format!("Session actor dropped the request: {}", err))
    }
}
