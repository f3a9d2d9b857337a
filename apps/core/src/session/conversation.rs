//! Conversation Session - owns the message history and turn-taking for one chat.

use tracing::{debug, info};
use uuid::Uuid;

use super::state::{PendingReply, ReplyDelays, ReplyOrigin, SessionState};
use crate::brain::{mood_acknowledgment, ClassificationResult, MessageClassifier, ResponseSelector};
use crate::error::AppError;
use crate::models::{Message, Mood};

/// One user's conversation, alive for the duration of a chat screen.
///
/// Invariants:
/// - the seeded greeting sits at index 0 and is never removed
/// - at most one reply is outstanding; `awaiting_reply()` holds from the user
///   message append until the matching bot reply append
/// - `mood` leaves `Unset` at most once, and only while the greeting is the only message
#[derive(Debug)]
pub struct ConversationSession {
    id: Uuid,
    messages: Vec<Message>,
    anonymous: bool,
    mood: Mood,
    state: SessionState,
    pending: Option<PendingReply>,
    classifier: MessageClassifier,
    selector: ResponseSelector,
    delays: ReplyDelays,
}

impl ConversationSession {
    /// Start a conversation with the default engine and reply delays
    pub fn new(anonymous: bool) -> Self {
        Self::with_engine(
            anonymous,
            MessageClassifier::new(),
            ResponseSelector::new(),
            ReplyDelays::default(),
        )
    }

    pub fn with_engine(
        anonymous: bool,
        classifier: MessageClassifier,
        selector: ResponseSelector,
        delays: ReplyDelays,
    ) -> Self {
        let greeting = Message::bot(selector.greeting(anonymous), ClassificationResult::greeting());
        let id = Uuid::new_v4();
        info!(session_id = %id, anonymous, "Conversation session started");

        Self {
            id,
            messages: vec![greeting],
            anonymous,
            mood: Mood::Unset,
            state: SessionState::Idle,
            pending: None,
            classifier,
            selector,
            delays,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn awaiting_reply(&self) -> bool {
        self.state == SessionState::Pending
    }

    pub fn delays(&self) -> ReplyDelays {
        self.delays
    }

    /// Reply currently in flight, if any
    pub fn pending_reply(&self) -> Option<&PendingReply> {
        self.pending.as_ref()
    }

    /// Run the local classifier and selector against `text`. Pure.
    pub fn compose_local_reply(&self, text: &str) -> PendingReply {
        let classification = self.classifier.classify(text);
        debug!(session_id = %self.id, "Classified: {}", classification.summary());
        PendingReply {
            text: self.selector.select_response(&classification),
            delay: self.delays.for_response(classification.response_type),
            classification,
            origin: ReplyOrigin::Local,
        }
    }

    /// Append a user message and compute the prospective bot reply.
    ///
    /// Rejects empty or whitespace-only text and any submission while a reply is
    /// still in flight. Nothing is appended on rejection.
    pub fn submit_user_message(&mut self, text: &str) -> Result<PendingReply, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Message is empty".to_string()));
        }
        if self.awaiting_reply() {
            return Err(AppError::Validation(
                "A reply is still on its way; wait for it before sending another message".to_string(),
            ));
        }

        let reply = self.compose_local_reply(text);
        self.messages.push(Message::user(text, self.anonymous));
        self.transition(SessionState::Pending)?;
        self.pending = Some(reply.clone());

        info!(
            session_id = %self.id,
            length = text.len(),
            anonymous = self.anonymous,
            delay_ms = reply.delay.as_millis() as u64,
            "User message accepted"
        );
        Ok(reply)
    }

    /// Replace the in-flight reply, e.g. with the remote backend's answer.
    pub fn resolve_pending_reply(&mut self, reply: PendingReply) -> Result<(), AppError> {
        match self.pending.as_mut() {
            Some(pending) => {
                *pending = reply;
                Ok(())
            }
            None => Err(AppError::Validation("No reply is pending".to_string())),
        }
    }

    /// Append the pending bot reply and return to `Idle`.
    pub fn record_bot_reply(&mut self) -> Result<&Message, AppError> {
        let reply = self
            .pending
            .take()
            .ok_or_else(|| AppError::Validation("No reply is pending".to_string()))?;
        self.transition(SessionState::Idle)?;
        self.messages
            .push(Message::bot(reply.text, reply.classification));

        info!(session_id = %self.id, origin = ?reply.origin, "Bot reply recorded");
        self.messages
            .last()
            .ok_or_else(|| AppError::Internal("Bot reply vanished after append".to_string()))
    }

    /// One-shot mood check-in. Submits the canned acknowledgment for `mood` as the
    /// user's message, which then follows the normal reply pipeline.
    pub fn select_mood(&mut self, mood: Mood) -> Result<PendingReply, AppError> {
        let acknowledgment = mood_acknowledgment(mood)
            .ok_or_else(|| AppError::Validation("Pick great, good, okay or struggling".to_string()))?;
        if self.mood.is_set() {
            return Err(AppError::Validation(format!(
                "Mood already recorded as {}",
                self.mood
            )));
        }
        if self.messages.len() != 1 {
            return Err(AppError::Validation(
                "Mood can only be chosen before the conversation starts".to_string(),
            ));
        }

        let reply = self.submit_user_message(acknowledgment)?;
        self.mood = mood;
        info!(session_id = %self.id, %mood, "Mood recorded");
        Ok(reply)
    }

    /// Flip anonymity for future user messages. Returns the new value.
    pub fn toggle_anonymous(&mut self) -> bool {
        self.anonymous = !self.anonymous;
        info!(session_id = %self.id, anonymous = self.anonymous, "Anonymity toggled");
        self.anonymous
    }

    fn transition(&mut self, target: SessionState) -> Result<(), AppError> {
        if !self.state.can_transition_to(target) {
            return Err(AppError::Internal(format!(
                "Cannot transition from {} to {}",
                self.state, target
            )));
        }
        self.state = target;
        Ok(())
    }
}
