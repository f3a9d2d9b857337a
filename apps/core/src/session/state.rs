//! Session state machine types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::brain::{ClassificationResult, ResponseType};

pub const EMOTIONAL_REPLY_DELAY: Duration = Duration::from_millis(2500);
pub const INFORMATIONAL_REPLY_DELAY: Duration = Duration::from_millis(1500);
pub const FALLBACK_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Turn-taking state of a conversation.
///
/// Idle → Pending on a submitted user message, Pending → Idle when the bot reply
/// is recorded. No other transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Pending,
}

impl SessionState {
    pub fn can_transition_to(&self, target: SessionState) -> bool {
        matches!(
            (self, target),
            (SessionState::Idle, SessionState::Pending) | (SessionState::Pending, SessionState::Idle)
        )
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Idle => "idle",
            SessionState::Pending => "pending",
        };
        write!(f, "{s}")
    }
}

/// Where a prospective reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyOrigin {
    /// Local classifier and selector
    Local,
    /// Remote backend answered
    Remote,
    /// Remote backend failed, local engine answered with the unreachable notice
    Fallback,
}

/// Advisory pause before a reply is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelays {
    pub emotional: Duration,
    pub informational: Duration,
    pub fallback: Duration,
}

impl Default for ReplyDelays {
    fn default() -> Self {
        Self {
            emotional: EMOTIONAL_REPLY_DELAY,
            informational: INFORMATIONAL_REPLY_DELAY,
            fallback: FALLBACK_REPLY_DELAY,
        }
    }
}

impl ReplyDelays {
    pub fn for_response(&self, response_type: ResponseType) -> Duration {
        match response_type {
            ResponseType::EmotionalSupport => self.emotional,
            ResponseType::Informational => self.informational,
        }
    }
}

/// Bot reply computed at submission time, appended once its delay has elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub text: String,
    pub classification: ClassificationResult,
    pub delay: Duration,
    pub origin: ReplyOrigin,
}
