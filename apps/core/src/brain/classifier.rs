//! Message Classification using the emotion lexicon.
//!
//! Deterministic keyword detection, no model required. Classification is total:
//! every input, including the empty string, yields a result.

use super::classification::{Category, ClassificationResult, Priority, ResponseType};
use super::lexicon::TriggerLexicon;

/// Substrings that route an emotion-free message to the program category
const PROGRAM_KEYWORDS: [&str; 2] = ["ilp", "program"];

/// Rule-based message classifier
#[derive(Debug, Clone)]
pub struct MessageClassifier {
    lexicon: TriggerLexicon,
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageClassifier {
    /// Create a classifier over the default lexicon
    pub fn new() -> Self {
        Self {
            lexicon: TriggerLexicon::shared().clone(),
        }
    }

    /// Create a classifier over a custom lexicon
    pub fn with_lexicon(lexicon: TriggerLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &TriggerLexicon {
        &self.lexicon
    }

    /// Classify a raw user message
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let lowered = text.to_lowercase();
        let emotions = self.lexicon.detect(&lowered);

        if !emotions.is_empty() {
            return ClassificationResult {
                emotions,
                response_type: ResponseType::EmotionalSupport,
                priority: Priority::High,
                category: Category::Wellness,
            };
        }

        let category = if PROGRAM_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            Category::Program
        } else {
            Category::General
        };

        ClassificationResult {
            emotions,
            response_type: ResponseType::Informational,
            priority: Priority::Medium,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::lexicon::EmotionTag;

    #[test]
    fn test_emotional_message() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("I'm anxious about assessments");

        assert_eq!(result.emotions, vec![EmotionTag::Anxiety]);
        assert_eq!(result.response_type, ResponseType::EmotionalSupport);
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.category, Category::Wellness);
    }

    #[test]
    fn test_program_question() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("What is the ILP program structure?");

        assert!(result.emotions.is_empty());
        assert_eq!(result.response_type, ResponseType::Informational);
        assert_eq!(result.priority, Priority::Medium);
        assert_eq!(result.category, Category::Program);
    }

    #[test]
    fn test_emotion_wins_over_program_keyword() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("I'm feeling overwhelmed with ILP");

        assert_eq!(result.emotions, vec![EmotionTag::Overwhelm]);
        assert_eq!(result.category, Category::Wellness);
    }

    #[test]
    fn test_empty_input_is_general() {
        let classifier = MessageClassifier::new();
        for text in ["", "   ", "\n\t"] {
            let result = classifier.classify(text);
            assert!(result.emotions.is_empty());
            assert_eq!(result.category, Category::General);
            assert_eq!(result.response_type, ResponseType::Informational);
        }
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = TriggerLexicon::new(vec![(EmotionTag::Homesick, vec!["mum".to_string()])]);
        let classifier = MessageClassifier::with_lexicon(lexicon);

        assert_eq!(classifier.classify("I MISS MUM").emotions, vec![EmotionTag::Homesick]);
        // default phrases are not part of a custom lexicon
        assert!(classifier.classify("I'm anxious").emotions.is_empty());
    }
}
