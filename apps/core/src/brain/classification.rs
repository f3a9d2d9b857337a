//! Classification Result - output structure of the message classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::EmotionTag;

/// Kind of reply the message calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Acknowledge the feeling first
    EmotionalSupport,
    /// Transmit information
    Informational,
}

impl Default for ResponseType {
    fn default() -> Self {
        ResponseType::Informational
    }
}

/// Triage priority, ordered from least to most pressing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    Critical,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Topic label attached to a classification.
///
/// The local classifier only produces `Wellness`, `Program` and `General`; the
/// remote backend may send any label, which is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Wellness,
    Program,
    General,
    Technical,
    Resources,
    Schedule,
    Hr,
    Social,
    Career,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Wellness => "wellness",
            Category::Program => "program",
            Category::General => "general",
            Category::Technical => "technical",
            Category::Resources => "resources",
            Category::Schedule => "schedule",
            Category::Hr => "hr",
            Category::Social => "social",
            Category::Career => "career",
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.trim().to_lowercase().as_str() {
            "wellness" => Category::Wellness,
            "program" => Category::Program,
            "general" => Category::General,
            "technical" => Category::Technical,
            "resources" => Category::Resources,
            "schedule" => Category::Schedule,
            "hr" => Category::Hr,
            "social" => Category::Social,
            "career" => Category::Career,
            _ => Category::Other(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::from(label.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Detected emotions in lexicon order, deduplicated. Empty means no emotional signal.
    pub emotions: Vec<EmotionTag>,
    pub response_type: ResponseType,
    pub priority: Priority,
    pub category: Category,
}

impl ClassificationResult {
    /// Classification carried by the seeded greeting message
    pub fn greeting() -> Self {
        Self {
            emotions: vec![],
            response_type: ResponseType::EmotionalSupport,
            priority: Priority::Low,
            category: Category::General,
        }
    }

    pub fn is_emotional(&self) -> bool {
        self.response_type == ResponseType::EmotionalSupport
    }

    pub fn has_emotion(&self, tag: EmotionTag) -> bool {
        self.emotions.contains(&tag)
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        let emotions = if self.emotions.is_empty() {
            "none".to_string()
        } else {
            self.emotions
                .iter()
                .map(|e| e.label())
                .collect::<Vec<_>>()
                .join(",")
        };
        format!(
            "Emotions: {}, Type: {:?}, Priority: {}, Category: {}",
            emotions, self.response_type, self.priority, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Urgent);
        assert!(Priority::Urgent < Priority::Critical);
    }

    #[test]
    fn test_category_round_trips_unknown_labels() {
        let category: Category = serde_json::from_str("\"Onboarding-Logistics\"").unwrap();
        assert_eq!(category, Category::Other("Onboarding-Logistics".to_string()));
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"Onboarding-Logistics\"");

        let category: Category = serde_json::from_str("\"Technical\"").unwrap();
        assert_eq!(category, Category::Technical);
    }

    #[test]
    fn test_wire_labels() {
        assert_eq!(
            serde_json::to_string(&ResponseType::EmotionalSupport).unwrap(),
            "\"emotional_support\""
        );
        assert_eq!(serde_json::to_string(&Priority::Urgent).unwrap(), "\"urgent\"");
    }

    #[test]
    fn test_summary() {
        let result = ClassificationResult {
            emotions: vec![EmotionTag::Anxiety, EmotionTag::Homesick],
            response_type: ResponseType::EmotionalSupport,
            priority: Priority::High,
            category: Category::Wellness,
        };
        let summary = result.summary();
        assert!(summary.contains("anxiety,homesick"));
        assert!(summary.contains("Priority: high"));
        assert!(summary.contains("Category: wellness"));
    }
}
