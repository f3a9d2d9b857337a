//! Test Module
//!
//! Cross-module suites for the companion engine.
//!
//! ## Test Categories
//! - `brain_tests`: lexicon detection, classification properties, template ladder
//! - `session_tests`: conversation state machine, mood check-in, turn-taking
//! - `actor_tests`: session actor events, timing, voice and listening
//! - `transport_tests`: remote backend replies and the local fallback

pub mod brain_tests;
pub mod session_tests;

use crate::actors::SessionEvent;
use crate::actors::SpeechCapability;
use crate::error::AppError;
use crate::models::Message;
use crate::session::ReplyTimer;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::{mpsc, Notify};
use tokio::time::{timeout, Duration};

// ============================================================================
// Shared test doubles
// ============================================================================

/// Completes immediately and remembers every requested delay.
#[derive(Default)]
pub struct RecordingTimer {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingTimer {
    pub fn recorded(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplyTimer for RecordingTimer {
    async fn wait(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}

/// Holds every reply until `release` is called, one per call.
#[derive(Default)]
pub struct GateTimer {
    gate: Notify,
}

impl GateTimer {
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl ReplyTimer for GateTimer {
    async fn wait(&self, _delay: Duration) {
        self.gate.notified().await;
    }
}

/// Speech double that records what it was asked to say.
#[derive(Default)]
pub struct FakeSpeech {
    spoken: Mutex<Vec<String>>,
    stops: AtomicUsize,
    transcript: Option<String>,
}

impl FakeSpeech {
    pub fn hearing(transcript: &str) -> Self {
        Self {
            transcript: Some(transcript.to_string()),
            ..Self::default()
        }
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechCapability for FakeSpeech {
    fn supports_synthesis(&self) -> bool {
        true
    }

    fn supports_recognition(&self) -> bool {
        true
    }

    fn speak(&self, text: &str) -> Result<(), AppError> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }

    fn is_speaking(&self) -> bool {
        false
    }

    async fn listen(&self) -> Result<Option<String>, AppError> {
        Ok(self.transcript.clone())
    }
}

// ============================================================================
// Event helpers
// ============================================================================

pub async fn next_event(events: &mut mpsc::Receiver<SessionEvent>) -> Option<SessionEvent> {
    timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("timed out waiting for a session event")
}

/// Skips events until the next bot reply.
pub async fn next_bot_reply(events: &mut mpsc::Receiver<SessionEvent>) -> Message {
    loop {
        match next_event(events).await {
            Some(SessionEvent::BotReply(message)) => return message,
            Some(_) => continue,
            None => panic!("event stream closed before a bot reply"),
        }
    }
}
