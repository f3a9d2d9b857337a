use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::brain::ClassificationResult;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Mood reported by the user at the start of a conversation.
///
/// Starts as `Unset` and moves at most once to one of the four terminal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Unset,
    Great,
    Good,
    Okay,
    Struggling,
}

impl Mood {
    pub fn is_set(&self) -> bool {
        !matches!(self, Mood::Unset)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Unset => "unset",
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Struggling => "struggling",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "great" => Ok(Mood::Great),
            "good" => Ok(Mood::Good),
            "okay" | "ok" => Ok(Mood::Okay),
            "struggling" => Ok(Mood::Struggling),
            other => Err(format!("unknown mood '{}', expected great, good, okay or struggling", other)),
        }
    }
}

/// Represents a single message within a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message.
    pub id: Uuid,
    /// The text content of the message.
    pub text: String,
    pub sender: Sender,
    /// When the message was appended to the conversation.
    pub timestamp: DateTime<Utc>,
    /// Anonymity mode at the moment a user message was created. Always false for bot messages.
    pub is_anonymous: bool,
    /// Classification behind a bot reply. User messages carry none.
    pub classification: Option<ClassificationResult>,
}

impl Message {
    pub fn user(text: impl Into<String>, is_anonymous: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            is_anonymous,
            classification: None,
        }
    }

    pub fn bot(text: impl Into<String>, classification: ClassificationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            is_anonymous: false,
            classification: Some(classification),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
