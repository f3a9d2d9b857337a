//! Wellness check-in: stress-level banding with fixed recommendations.

use serde::{Deserialize, Serialize};

const HIGH_STRESS_MESSAGE: &str = "I can see you're experiencing high stress levels. That's completely understandable during ILP - you're navigating so many new things! Let's talk about some immediate stress relief techniques and longer-term coping strategies. Remember, you're not alone in feeling this way. 💙";
const ELEVATED_STRESS_MESSAGE: &str = "I notice your stress levels are elevated. This is really common during the ILP period when everything is new. Would you like to share what's causing you the most stress right now? I'm here to help you work through it step by step. 🌟";
const MANAGING_MESSAGE: &str = "It sounds like you're managing things well! That's wonderful. Remember, it's normal for stress levels to fluctuate during your ILP journey. I'm here if you need support at any time. Keep up the great work! 💪";

const HIGH_STRESS_RECOMMENDATIONS: [&str; 4] = [
    "Try the 4-7-8 breathing technique: Inhale for 4, hold for 7, exhale for 8",
    "Take a 10-minute walk outside if possible",
    "Consider speaking with a counselor through the Employee Assistance Program",
    "Remember: It's okay to ask for help from your ILP coordinators",
];

const ELEVATED_STRESS_RECOMMENDATIONS: [&str; 4] = [
    "Practice mindfulness for 5 minutes using a meditation app",
    "Connect with fellow ILP participants - you're all in this together",
    "Create a daily schedule to feel more in control",
    "Celebrate small wins in your learning journey",
];

const MANAGING_RECOMMENDATIONS: [&str; 4] = [
    "Keep maintaining your current coping strategies!",
    "Share your success tips with other ILP participants",
    "Continue building healthy routines",
    "Stay connected with family and friends for emotional support",
];

pub const MIN_STRESS_LEVEL: u8 = 1;
pub const MAX_STRESS_LEVEL: u8 = 10;

/// Stress band derived from a 1-10 self-reported level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressBand {
    Managing,
    Elevated,
    High,
}

impl StressBand {
    pub fn from_level(level: u8) -> Self {
        match level.clamp(MIN_STRESS_LEVEL, MAX_STRESS_LEVEL) {
            8..=10 => StressBand::High,
            6..=7 => StressBand::Elevated,
            _ => StressBand::Managing,
        }
    }
}

/// Outcome of a wellness check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessCheck {
    pub stress_level: u8,
    pub band: StressBand,
    pub message: String,
    pub recommendations: Vec<String>,
}

/// Local reference answer for a check-in. Out-of-range levels are clamped to 1..=10.
pub fn wellness_check(stress_level: u8) -> WellnessCheck {
    let stress_level = stress_level.clamp(MIN_STRESS_LEVEL, MAX_STRESS_LEVEL);
    let band = StressBand::from_level(stress_level);
    let (message, recommendations) = match band {
        StressBand::High => (HIGH_STRESS_MESSAGE, HIGH_STRESS_RECOMMENDATIONS),
        StressBand::Elevated => (ELEVATED_STRESS_MESSAGE, ELEVATED_STRESS_RECOMMENDATIONS),
        StressBand::Managing => (MANAGING_MESSAGE, MANAGING_RECOMMENDATIONS),
    };

    WellnessCheck {
        stress_level,
        band,
        message: message.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}
