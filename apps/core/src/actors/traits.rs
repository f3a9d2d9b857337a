use crate::actors::backend::{ChatRequest, ChatResponse, WellnessRequest, WellnessResponse};
use crate::error::AppError;
use async_trait::async_trait;

/// Defines the public interface for a remote support backend.
///
/// This trait abstracts the transport so the adapter can be exercised against
/// an HTTP server, a test double, or anything else that honours the contract.
#[async_trait]
pub trait ChatBackend: Send + Sync + 'static {
    /// Sends one user message and returns the backend's structured reply.
    ///
    /// Any failure (unreachable host, timeout, non-success status, malformed body
    /// or `success: false`) is reported as an error.
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;

    /// Submits a wellness check-in.
    async fn wellness_check(&self, request: &WellnessRequest) -> Result<WellnessResponse, AppError>;

    /// Returns true if the backend reports itself healthy.
    async fn check_health(&self) -> bool;
}

/// Defines the public interface for the host's speech I/O.
///
/// Both halves are optional: a host without synthesis or recognition answers
/// with `AppError::UnsupportedCapability` and the conversation carries on.
#[async_trait]
pub trait SpeechCapability: Send + Sync + 'static {
    fn supports_synthesis(&self) -> bool;

    fn supports_recognition(&self) -> bool;

    /// Starts speaking `text`. Any utterance already playing is stopped first.
    fn speak(&self, text: &str) -> Result<(), AppError>;

    /// Stops the current utterance, if any. Safe to call when silent.
    fn stop(&self);

    fn is_speaking(&self) -> bool;

    /// Listens for a single utterance. `Ok(None)` means nothing was heard.
    async fn listen(&self) -> Result<Option<String>, AppError>;
}
