//! Response Selection - maps a classification onto a fixed reply template.
//!
//! Selection is a strict ladder evaluated top-down; the first matching rung wins
//! and templates are never blended.

use serde::{Deserialize, Serialize};

use super::classification::{Category, ClassificationResult};
use super::lexicon::EmotionTag;
use crate::models::Mood;

const ANXIETY_SUPPORT: &str = "I can sense you're feeling anxious, and that's completely understandable. The ILP journey can feel overwhelming at times. Remember, anxiety is your mind trying to prepare you for challenges, which shows you care about doing well.

Take a deep breath with me - in for 4 counts, hold for 4, out for 6. You're not alone in this feeling, and it doesn't define your capabilities.

Would you like some specific techniques to manage these anxious feelings, or would you prefer to talk about what's specifically worrying you? 💙";

const OVERWHELM_SUPPORT: &str = "Feeling overwhelmed is so common during ILP - you're processing a lot of new information and experiences. It's okay to feel this way, and it's actually a sign that you're pushing yourself to grow.

Let's break this down together. When we feel overwhelmed, it often helps to focus on just one small thing at a time. What's one small step you could take today that would make you feel a bit more in control?

Remember: You don't have to master everything at once. Progress, not perfection. 🌟";

const HOMESICK_SUPPORT: &str = "Homesickness during ILP is so natural and shows how much your support system means to you. It's not a weakness - it's love for the people and places that shaped you.

This feeling will ease as you build new connections and create a sense of belonging in your new environment. In the meantime, staying connected with home while also opening yourself to new friendships can help.

What's one thing about home that you miss most? Sometimes talking about it can help process these feelings. 🤗";

const EMOTIONAL_ACKNOWLEDGMENT: &str = "I can hear that you're going through something challenging right now. Your feelings are valid, and it's brave of you to reach out.

The ILP journey has ups and downs for everyone, and experiencing difficult emotions doesn't mean you're not cut out for this - it means you're human and you're growing.

I'm here to listen and support you through this. What would feel most helpful right now - some practical strategies, or would you like to talk more about what's on your mind? 💙";

const PROGRAM_STRUCTURE: &str = "Great question about the ILP program! The Initial Learning Program is designed to give you a comprehensive foundation in technology and professional skills.

The program typically includes:
- Technical training modules in your chosen stream
- Soft skills development sessions
- Project-based learning experiences
- Peer collaboration opportunities
- Mentorship and support systems

Is there a specific aspect of the ILP structure you'd like to know more about? I'm here to help you navigate any part of your journey! 🚀";

const GENERAL_SUPPORT: &str = "Thank you for sharing that with me! I'm here to support you throughout your ILP journey, whether it's technical questions, emotional support, or just someone to talk to.

Every question and concern you have is important. Feel free to share whatever is on your mind - there's no topic too big or small.

How can I best support you today? 💙";

const GREETING_OPENING: &str = "Hi there! I'm Maya, your emotional support companion for the ILP journey! 🌟

I'm here to help you navigate not just the technical aspects of your training, but also support you through any emotional challenges you might face. Whether you're feeling anxious, overwhelmed, homesick, or just need someone to talk to - I'm here 24/7.

Your mental wellbeing matters just as much as your professional growth.";

const GREETING_ANONYMOUS: &str = "You're in a safe, anonymous space where you can share openly.";
const GREETING_IDENTIFIED: &str = "Feel free to share whatever is on your mind.";
const GREETING_CLOSING: &str = "What would you like to talk about today? 💙";

/// Opening paragraph of every reply produced while the remote backend is unreachable
pub const FALLBACK_NOTICE: &str = "I can't reach the support system right now, so I'm answering with my built-in guidance instead. I'm still here for you and we can keep talking.";

const MOOD_GREAT: &str = "That's wonderful to hear! 🌟 I'm so glad you're feeling great. What's going particularly well in your ILP journey?";
const MOOD_GOOD: &str = "I'm happy you're feeling good! 😊 Keep up that positive energy. Is there anything specific that's contributing to your good mood?";
const MOOD_OKAY: &str = "It's completely normal to feel 'okay' sometimes. 💙 Every day in ILP doesn't have to be perfect. Would you like to talk about what's on your mind?";
const MOOD_STRUGGLING: &str = "I hear you, and I want you to know that struggling is a normal part of the ILP experience. You're not alone in this. 🤗 Would you like to share what's making things challenging right now?";

/// Which template a classification resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    AnxietySupport,
    OverwhelmSupport,
    HomesickSupport,
    EmotionalAcknowledgment,
    ProgramStructure,
    GeneralSupport,
}

impl ResponseKind {
    pub fn template(&self) -> &'static str {
        match self {
            ResponseKind::AnxietySupport => ANXIETY_SUPPORT,
            ResponseKind::OverwhelmSupport => OVERWHELM_SUPPORT,
            ResponseKind::HomesickSupport => HOMESICK_SUPPORT,
            ResponseKind::EmotionalAcknowledgment => EMOTIONAL_ACKNOWLEDGMENT,
            ResponseKind::ProgramStructure => PROGRAM_STRUCTURE,
            ResponseKind::GeneralSupport => GENERAL_SUPPORT,
        }
    }
}

/// Picks and renders reply templates
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseSelector;

impl ResponseSelector {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the template ladder for a classification
    pub fn select_kind(&self, result: &ClassificationResult) -> ResponseKind {
        if result.has_emotion(EmotionTag::Anxiety) {
            ResponseKind::AnxietySupport
        } else if result.has_emotion(EmotionTag::Overwhelm) {
            ResponseKind::OverwhelmSupport
        } else if result.has_emotion(EmotionTag::Homesick) {
            ResponseKind::HomesickSupport
        } else if !result.emotions.is_empty() {
            ResponseKind::EmotionalAcknowledgment
        } else if result.category == Category::Program {
            ResponseKind::ProgramStructure
        } else {
            ResponseKind::GeneralSupport
        }
    }

    /// Fully rendered reply text for a classification
    pub fn select_response(&self, result: &ClassificationResult) -> String {
        self.select_kind(result).template().to_string()
    }

    /// Seeded greeting; the only text carrying the anonymity clause
    pub fn greeting(&self, anonymous: bool) -> String {
        let clause = if anonymous {
            GREETING_ANONYMOUS
        } else {
            GREETING_IDENTIFIED
        };
        format!("{} {}\n\n{}", GREETING_OPENING, clause, GREETING_CLOSING)
    }

    /// Reply used when the remote backend could not be reached
    pub fn fallback_reply(&self, result: &ClassificationResult) -> String {
        format!("{}\n\n{}", FALLBACK_NOTICE, self.select_kind(result).template())
    }
}

/// Canned acknowledgment submitted on behalf of the user when a mood is picked
pub fn mood_acknowledgment(mood: Mood) -> Option<&'static str> {
    match mood {
        Mood::Unset => None,
        Mood::Great => Some(MOOD_GREAT),
        Mood::Good => Some(MOOD_GOOD),
        Mood::Okay => Some(MOOD_OKAY),
        Mood::Struggling => Some(MOOD_STRUGGLING),
    }
}
