//! Emotion Lexicon - static trigger phrases per emotion category.
//!
//! Matching is plain substring containment against the lowercased message, not
//! whole-word matching. "family" therefore also fires inside unrelated sentences;
//! that precision/recall trade-off is kept on purpose.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Emotion category detected in a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTag {
    Anxiety,
    Overwhelm,
    Confidence,
    Homesick,
    /// The user is asking for help, guidance or advice
    #[serde(rename = "support", alias = "support_seeking")]
    SupportSeeking,
}

impl EmotionTag {
    /// All tags in lexicon declaration order
    pub const ALL: [EmotionTag; 5] = [
        EmotionTag::Anxiety,
        EmotionTag::Overwhelm,
        EmotionTag::Confidence,
        EmotionTag::Homesick,
        EmotionTag::SupportSeeking,
    ];

    /// Returns the wire label of the tag
    pub fn label(&self) -> &'static str {
        match self {
            EmotionTag::Anxiety => "anxiety",
            EmotionTag::Overwhelm => "overwhelm",
            EmotionTag::Confidence => "confidence",
            EmotionTag::Homesick => "homesick",
            EmotionTag::SupportSeeking => "support",
        }
    }
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EmotionTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "anxiety" => Ok(EmotionTag::Anxiety),
            "overwhelm" => Ok(EmotionTag::Overwhelm),
            "confidence" => Ok(EmotionTag::Confidence),
            "homesick" => Ok(EmotionTag::Homesick),
            "support" | "support_seeking" => Ok(EmotionTag::SupportSeeking),
            other => Err(format!("unknown emotion tag: {}", other)),
        }
    }
}

/// Default trigger phrases, in evaluation order
pub const DEFAULT_TRIGGERS: [(EmotionTag, &[&str]); 5] = [
    (
        EmotionTag::Anxiety,
        &["anxious", "worried", "nervous", "panic", "fear"],
    ),
    (
        EmotionTag::Overwhelm,
        &["overwhelmed", "too much", "stressed", "pressure", "burden"],
    ),
    (
        EmotionTag::Confidence,
        &["confident", "doubt", "unsure", "imposter", "capable"],
    ),
    (
        EmotionTag::Homesick,
        &["homesick", "miss home", "family", "lonely", "isolated"],
    ),
    (
        EmotionTag::SupportSeeking,
        &["help", "support", "guidance", "advice", "assistance"],
    ),
];

static SHARED_LEXICON: LazyLock<TriggerLexicon> = LazyLock::new(TriggerLexicon::default);

/// Ordered mapping from emotion category to its trigger phrases.
///
/// Immutable once built. Phrases are stored lowercased.
#[derive(Debug, Clone)]
pub struct TriggerLexicon {
    entries: Vec<(EmotionTag, Vec<String>)>,
}

impl Default for TriggerLexicon {
    fn default() -> Self {
        Self::new(
            DEFAULT_TRIGGERS
                .iter()
                .map(|(tag, phrases)| (*tag, phrases.iter().map(|p| p.to_string()).collect())),
        )
    }
}

impl TriggerLexicon {
    /// Build a lexicon from (tag, phrases) pairs. Declaration order is evaluation order;
    /// a tag declared twice keeps its first position and merges the phrases.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (EmotionTag, Vec<String>)>,
    {
        let mut merged: Vec<(EmotionTag, Vec<String>)> = Vec::new();
        for (tag, phrases) in entries {
            let phrases = phrases
                .into_iter()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty());
            match merged.iter_mut().find(|(existing, _)| *existing == tag) {
                Some((_, list)) => list.extend(phrases),
                None => merged.push((tag, phrases.collect())),
            }
        }
        Self { entries: merged }
    }

    /// Process-wide default lexicon, built on first use
    pub fn shared() -> &'static TriggerLexicon {
        &SHARED_LEXICON
    }

    /// Categories in evaluation order
    pub fn tags(&self) -> impl Iterator<Item = EmotionTag> + '_ {
        self.entries.iter().map(|(tag, _)| *tag)
    }

    /// Trigger phrases for one category
    pub fn phrases(&self, tag: EmotionTag) -> &[String] {
        self.entries
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, phrases)| phrases.as_slice())
            .unwrap_or(&[])
    }

    /// Categories whose phrases occur in `lowered`, in declaration order, each at most once.
    ///
    /// The caller must pass already-lowercased text.
    pub fn detect(&self, lowered: &str) -> Vec<EmotionTag> {
        self.entries
            .iter()
            .filter(|(_, phrases)| phrases.iter().any(|p| lowered.contains(p.as_str())))
            .map(|(tag, _)| *tag)
            .collect()
    }
}
