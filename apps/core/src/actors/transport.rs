//! Transport Adapter - remote backend first, local engine on any failure.
//!
//! The adapter never returns an error: a failed remote call turns into a fallback
//! reply that says plainly that the support system is unreachable.

use crate::actors::backend::{ChatRequest, ChatResponse, WellnessRequest};
use crate::actors::traits::ChatBackend;
use crate::brain::{
    wellness_check, Category, ClassificationResult, EmotionTag, MessageClassifier, Priority,
    ResponseSelector, ResponseType, WellnessCheck,
};
use crate::models::Mood;
use crate::session::{PendingReply, ReplyDelays, ReplyOrigin};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Wraps a `ChatBackend` with the local classifier and selector as fallback.
#[derive(Clone)]
pub struct TransportAdapter {
    backend: Arc<dyn ChatBackend>,
    classifier: MessageClassifier,
    selector: ResponseSelector,
    delays: ReplyDelays,
}

impl TransportAdapter {
    pub fn new(backend: Arc<dyn ChatBackend>, delays: ReplyDelays) -> Self {
        Self {
            backend,
            classifier: MessageClassifier::new(),
            selector: ResponseSelector::new(),
            delays,
        }
    }

    /// Ask the backend for a reply to `text`, falling back locally on any failure.
    #[instrument(skip(self, text), fields(length = text.len()))]
    pub async fn respond(&self, text: &str, is_anonymous: bool) -> PendingReply {
        let request = ChatRequest {
            message: text.to_string(),
            is_anonymous,
        };

        match self.backend.send_message(&request).await {
            Ok(response) => self.map_remote(response),
            Err(e) if e.is_transport_failure() => {
                warn!("Remote backend unavailable, answering locally: {}", e);
                self.fallback(text)
            }
            Err(e) => {
                error!("Unexpected backend error, answering locally: {}", e);
                self.fallback(text)
            }
        }
    }

    /// Convert a successful backend reply into the session's reply shape.
    pub fn map_remote(&self, response: ChatResponse) -> PendingReply {
        let emotions: Vec<EmotionTag> = response
            .emotions_detected
            .iter()
            .filter_map(|label| match label.parse::<EmotionTag>() {
                Ok(tag) => Some(tag),
                Err(e) => {
                    debug!("Dropping emotion outside the local lexicon: {}", e);
                    None
                }
            })
            .fold(Vec::new(), |mut acc, tag| {
                if !acc.contains(&tag) {
                    acc.push(tag);
                }
                acc
            });

        let response_type = response.response_type;
        let priority = response.priority.unwrap_or(match response_type {
            ResponseType::EmotionalSupport => Priority::High,
            ResponseType::Informational => Priority::Medium,
        });
        let category = response
            .category
            .map(Category::from)
            .unwrap_or(Category::General);

        PendingReply {
            text: response.message,
            classification: ClassificationResult {
                emotions,
                response_type,
                priority,
                category,
            },
            delay: self.delays.for_response(response_type),
            origin: ReplyOrigin::Remote,
        }
    }

    /// Local reply used when the backend cannot answer.
    ///
    /// Always emotional support with the fixed fallback delay, whatever the local
    /// classification says.
    pub fn fallback(&self, text: &str) -> PendingReply {
        let mut classification = self.classifier.classify(text);
        let text = self.selector.fallback_reply(&classification);
        classification.response_type = ResponseType::EmotionalSupport;

        PendingReply {
            text,
            classification,
            delay: self.delays.fallback,
            origin: ReplyOrigin::Fallback,
        }
    }

    /// Wellness check-in through the backend, with the local bands as fallback.
    pub async fn wellness_check(&self, mood: Mood, stress_level: u8) -> WellnessCheck {
        let local = wellness_check(stress_level);
        let request = WellnessRequest {
            mood: mood.label().to_string(),
            stress_level: local.stress_level,
        };

        match self.backend.wellness_check(&request).await {
            Ok(response) => WellnessCheck {
                message: response.message,
                recommendations: if response.recommendations.is_empty() {
                    local.recommendations
                } else {
                    response.recommendations
                },
                ..local
            },
            Err(e) => {
                warn!("Wellness check-in answered locally: {}", e);
                local
            }
        }
    }

    pub async fn check_health(&self) -> bool {
        self.backend.check_health().await
    }
}
