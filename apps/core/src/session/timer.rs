use async_trait::async_trait;
use std::time::Duration;

/// One-shot delay before a pending reply is delivered.
///
/// Injected into the session actor so tests can run without wall-clock waits.
#[async_trait]
pub trait ReplyTimer: Send + Sync + 'static {
    /// Completes once `delay` has elapsed.
    async fn wait(&self, delay: Duration);
}

/// Wall-clock timer backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioReplyTimer;

#[async_trait]
impl ReplyTimer for TokioReplyTimer {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test]
    async fn test_tokio_timer_waits() {
        let start = Instant::now();
        TokioReplyTimer.wait(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
