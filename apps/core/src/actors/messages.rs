use crate::brain::WellnessCheck;
use crate::error::AppError;
use crate::models::{Message, Mood};
use crate::session::{PendingReply, SessionState};
use serde::Serialize;
use tokio::sync::oneshot;
use uuid::Uuid;

/// Messages that can be sent to the `SessionRunner`.
#[derive(Debug)]
pub enum SessionMessage {
    /// A line of user text. Answers with the appended user message.
    Submit {
        text: String,
        responder: oneshot::Sender<Result<Message, AppError>>,
    },
    /// The one-shot mood check-in. Answers with the canned user message.
    SelectMood {
        mood: Mood,
        responder: oneshot::Sender<Result<Message, AppError>>,
    },
    ToggleAnonymous {
        responder: oneshot::Sender<bool>,
    },
    /// Flip auto-speak of bot replies. Enabling fails when the host cannot speak.
    ToggleVoice {
        responder: oneshot::Sender<Result<bool, AppError>>,
    },
    /// Listen for one utterance and submit it. `Ok(None)` means nothing was heard.
    Listen {
        responder: oneshot::Sender<Result<Option<Message>, AppError>>,
    },
    WellnessCheck {
        stress_level: u8,
        responder: oneshot::Sender<WellnessCheck>,
    },
    Snapshot {
        responder: oneshot::Sender<SessionSnapshot>,
    },
    /// Internal: the scheduled delay for turn `turn` has elapsed.
    ReplyReady { turn: u64, reply: PendingReply },
    /// Stop the runner, cancelling any scheduled reply and utterance.
    Shutdown { responder: oneshot::Sender<()> },
}

/// Events published by the session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum SessionEvent {
    UserMessage(Message),
    /// The bot is composing a reply (true) or has just delivered it (false).
    Typing(bool),
    BotReply(Message),
    MoodSelected(Mood),
    AnonymityChanged(bool),
    VoiceChanged(bool),
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub messages: Vec<Message>,
    pub mood: Mood,
    pub anonymous: bool,
    pub voice_enabled: bool,
    pub state: SessionState,
}

impl SessionSnapshot {
    pub fn awaiting_reply(&self) -> bool {
        self.state == SessionState::Pending
    }
}
