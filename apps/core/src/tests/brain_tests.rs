//! Brain Module Tests
//!
//! Classification properties over the default lexicon and the reply ladder.

use crate::brain::{
    Category, EmotionTag, MessageClassifier, Priority, ResponseKind, ResponseSelector,
    ResponseType, TriggerLexicon,
};

#[cfg(test)]
mod classifier_property_tests {
    use super::*;

    const PREFIXES: [&str; 4] = ["", "Honestly ", "I think I'm ", "TODAY I AM VERY "];
    const SUFFIXES: [&str; 3] = ["", " about the assessments", "!!"];

    #[test]
    fn test_every_anxiety_phrase_yields_emotional_support() {
        let classifier = MessageClassifier::new();
        let lexicon = TriggerLexicon::shared();

        for phrase in lexicon.phrases(EmotionTag::Anxiety) {
            for prefix in PREFIXES {
                for suffix in SUFFIXES {
                    let text = format!("{}{}{}", prefix, phrase, suffix);
                    let result = classifier.classify(&text);
                    assert!(
                        result.has_emotion(EmotionTag::Anxiety),
                        "Expected anxiety for '{}'",
                        text
                    );
                    assert_eq!(result.response_type, ResponseType::EmotionalSupport);
                    assert_eq!(result.priority, Priority::High);
                    assert_eq!(result.category, Category::Wellness);
                }
            }
        }
    }

    #[test]
    fn test_neutral_text_is_general_information() {
        let classifier = MessageClassifier::new();
        let neutral = vec![
            "",
            "   ",
            "Where is the cafeteria?",
            "What time is lunch?",
            "Thanks, see you tomorrow",
            "12345 !!!",
            "🚀🚀🚀",
        ];

        for text in neutral {
            let result = classifier.classify(text);
            assert!(result.emotions.is_empty(), "No emotions expected for '{}'", text);
            assert_eq!(result.category, Category::General, "General expected for '{}'", text);
            assert_eq!(result.response_type, ResponseType::Informational);
            assert_eq!(result.priority, Priority::Medium);
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = MessageClassifier::new();
        let inputs = [
            "I'm anxious about assessments",
            "What is the ILP program structure?",
            "I miss home and my family",
            "",
        ];
        for text in inputs {
            assert_eq!(classifier.classify(text), classifier.classify(text));
            assert_eq!(classifier.classify(text), MessageClassifier::new().classify(text));
        }
    }

    #[test]
    fn test_emotions_follow_declaration_order_not_input_order() {
        let classifier = MessageClassifier::new();

        let forward = classifier.classify("I'm anxious and overwhelmed, I need help");
        let backward = classifier.classify("Help! I'm overwhelmed and anxious");

        let expected = vec![
            EmotionTag::Anxiety,
            EmotionTag::Overwhelm,
            EmotionTag::SupportSeeking,
        ];
        assert_eq!(forward.emotions, expected);
        assert_eq!(backward.emotions, expected);
    }

    #[test]
    fn test_repeated_phrases_are_reported_once() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("worried, worried, so nervous and worried");
        assert_eq!(result.emotions, vec![EmotionTag::Anxiety]);
    }

    #[test]
    fn test_substring_matching_has_known_false_positives() {
        // "family" belongs to the homesick set, so a neutral sentence still triggers it
        let classifier = MessageClassifier::new();
        let result = classifier.classify("My family is visiting next week");
        assert_eq!(result.emotions, vec![EmotionTag::Homesick]);
        assert_eq!(result.response_type, ResponseType::EmotionalSupport);
    }
}

#[cfg(test)]
mod selector_ladder_tests {
    use super::*;

    fn kind_for(text: &str) -> ResponseKind {
        let result = MessageClassifier::new().classify(text);
        ResponseSelector::new().select_kind(&result)
    }

    #[test]
    fn test_anxiety_scenario() {
        let result = MessageClassifier::new().classify("I'm anxious about assessments");
        assert_eq!(result.emotions, vec![EmotionTag::Anxiety]);
        assert_eq!(result.priority, Priority::High);

        let reply = ResponseSelector::new().select_response(&result);
        assert!(reply.contains("in for 4 counts, hold for 4, out for 6"));
    }

    #[test]
    fn test_program_scenario() {
        let result = MessageClassifier::new().classify("What is the ILP program structure?");
        assert!(result.emotions.is_empty());
        assert_eq!(result.category, Category::Program);

        let reply = ResponseSelector::new().select_response(&result);
        assert!(reply.contains("Initial Learning Program"));
    }

    #[test]
    fn test_ladder_order() {
        assert_eq!(kind_for("anxious and overwhelmed and homesick"), ResponseKind::AnxietySupport);
        assert_eq!(kind_for("I miss home and feel stressed"), ResponseKind::OverwhelmSupport);
        assert_eq!(kind_for("So lonely here"), ResponseKind::HomesickSupport);
        assert_eq!(kind_for("I doubt I'm capable"), ResponseKind::EmotionalAcknowledgment);
        assert_eq!(kind_for("Can you give me some guidance?"), ResponseKind::EmotionalAcknowledgment);
        assert_eq!(kind_for("Tell me about the program"), ResponseKind::ProgramStructure);
        assert_eq!(kind_for("Where is the cafeteria?"), ResponseKind::GeneralSupport);
    }

    #[test]
    fn test_emotion_outranks_program_keyword() {
        let result = MessageClassifier::new().classify("The ILP program makes me nervous");
        assert_eq!(result.category, Category::Wellness);
        assert_eq!(ResponseSelector::new().select_kind(&result), ResponseKind::AnxietySupport);
    }

    #[test]
    fn test_templates_are_fully_rendered() {
        let selector = ResponseSelector::new();
        let classifier = MessageClassifier::new();
        for text in ["anxious", "stressed", "homesick", "unsure", "program", "hello"] {
            let reply = selector.select_response(&classifier.classify(text));
            assert!(!reply.is_empty());
            assert!(!reply.contains('{') && !reply.contains('}'), "Placeholder left in '{}'", reply);
            // the anonymity clause only ever appears in the greeting
            assert!(!reply.contains("anonymous space"));
        }
    }

    #[test]
    fn test_greeting_carries_anonymity_clause_once() {
        let selector = ResponseSelector::new();
        let anonymous = selector.greeting(true);
        let identified = selector.greeting(false);

        assert_eq!(anonymous.matches("anonymous space").count(), 1);
        assert!(!identified.contains("anonymous space"));
        assert!(anonymous.contains("Maya") && identified.contains("Maya"));
    }
}
