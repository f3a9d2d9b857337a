//! Session State Machine Tests
//!
//! Turn-taking, the one-shot mood check-in and anonymity, driven synchronously
//! without any timer.

use crate::brain::{mood_acknowledgment, Priority, ResponseType};
use crate::error::AppError;
use crate::models::{Mood, Sender};
use crate::session::{ConversationSession, ReplyOrigin, SessionState};
use std::time::Duration;

#[cfg(test)]
mod turn_taking_tests {
    use super::*;

    #[test]
    fn test_second_submit_while_pending_is_rejected() {
        let mut session = ConversationSession::new(true);
        session.submit_user_message("hello").unwrap();

        let second = session.submit_user_message("are you there?");
        assert!(matches!(second, Err(AppError::Validation(_))));
        assert_eq!(session.messages().len(), 2);
        assert!(session.awaiting_reply());
    }

    #[test]
    fn test_round_trip_adds_exactly_two_messages() {
        let mut session = ConversationSession::new(false);
        let before = session.messages().len();

        session.submit_user_message("What is the ILP program structure?").unwrap();
        assert_eq!(session.state(), SessionState::Pending);
        session.record_bot_reply().unwrap();

        assert_eq!(session.messages().len(), before + 2);
        assert!(!session.awaiting_reply());
        assert_eq!(session.messages()[1].sender, Sender::User);
        assert_eq!(session.messages()[2].sender, Sender::Bot);
    }

    #[test]
    fn test_blank_input_is_rejected_without_append() {
        let mut session = ConversationSession::new(true);
        for text in ["", "   ", "\n\t"] {
            assert!(matches!(
                session.submit_user_message(text),
                Err(AppError::Validation(_))
            ));
        }
        assert_eq!(session.messages().len(), 1);
        assert!(!session.awaiting_reply());
    }

    #[test]
    fn test_anxiety_scenario_reply_and_delay() {
        let mut session = ConversationSession::new(true);
        let reply = session.submit_user_message("I'm anxious about assessments").unwrap();

        assert_eq!(reply.delay, Duration::from_millis(2500));
        assert_eq!(reply.origin, ReplyOrigin::Local);
        assert_eq!(reply.classification.priority, Priority::High);
        assert!(reply.text.contains("Take a deep breath"));

        let recorded = session.record_bot_reply().unwrap();
        assert_eq!(recorded.text, reply.text);
        assert_eq!(recorded.classification.as_ref(), Some(&reply.classification));
    }

    #[test]
    fn test_program_scenario_delay() {
        let mut session = ConversationSession::new(true);
        let reply = session
            .submit_user_message("What is the ILP program structure?")
            .unwrap();

        assert!(reply.classification.emotions.is_empty());
        assert_eq!(reply.classification.response_type, ResponseType::Informational);
        assert_eq!(reply.delay, Duration::from_millis(1500));
        assert!(reply.text.contains("Initial Learning Program"));
    }

    #[test]
    fn test_greeting_survives_many_turns() {
        let mut session = ConversationSession::new(true);
        let greeting = session.messages()[0].clone();

        for text in ["hi", "I feel lonely", "what about the program?"] {
            session.submit_user_message(text).unwrap();
            session.record_bot_reply().unwrap();
        }

        assert_eq!(session.messages().len(), 7);
        assert_eq!(session.messages()[0], greeting);
    }
}

#[cfg(test)]
mod mood_tests {
    use super::*;

    #[test]
    fn test_struggling_mood_scenario() {
        let mut session = ConversationSession::new(true);
        session.select_mood(Mood::Struggling).unwrap();

        assert_eq!(session.mood(), Mood::Struggling);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(
            session.messages()[1].text,
            mood_acknowledgment(Mood::Struggling).unwrap()
        );
        assert_eq!(session.messages()[1].sender, Sender::User);

        // rejected while the reply is pending and after it lands
        assert!(matches!(session.select_mood(Mood::Great), Err(AppError::Validation(_))));
        session.record_bot_reply().unwrap();
        assert!(matches!(session.select_mood(Mood::Good), Err(AppError::Validation(_))));
        assert_eq!(session.mood(), Mood::Struggling);
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_mood_reply_goes_through_delay_pipeline() {
        let mut session = ConversationSession::new(true);
        let reply = session.select_mood(Mood::Great).unwrap();

        assert!(session.awaiting_reply());
        let expected = session.delays().for_response(reply.classification.response_type);
        assert_eq!(reply.delay, expected);
    }

    #[test]
    fn test_mood_rejected_once_conversation_started() {
        let mut session = ConversationSession::new(true);
        session.submit_user_message("hello").unwrap();
        session.record_bot_reply().unwrap();

        assert!(matches!(session.select_mood(Mood::Okay), Err(AppError::Validation(_))));
        assert_eq!(session.mood(), Mood::Unset);
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_each_mood_has_its_own_acknowledgment() {
        let moods = [Mood::Great, Mood::Good, Mood::Okay, Mood::Struggling];
        let texts: Vec<&str> = moods.iter().filter_map(|m| mood_acknowledgment(*m)).collect();

        assert_eq!(texts.len(), 4);
        for (i, a) in texts.iter().enumerate() {
            for b in texts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}

#[cfg(test)]
mod anonymity_tests {
    use super::*;

    #[test]
    fn test_toggle_does_not_rewrite_history() {
        let mut session = ConversationSession::new(true);
        session.submit_user_message("first").unwrap();

        assert!(!session.toggle_anonymous());
        session.record_bot_reply().unwrap();
        session.submit_user_message("second").unwrap();

        let users: Vec<_> = session
            .messages()
            .iter()
            .filter(|m| m.is_from_user())
            .collect();
        assert!(users[0].is_anonymous);
        assert!(!users[1].is_anonymous);
    }

    #[test]
    fn test_toggle_keeps_pending_reply() {
        let mut session = ConversationSession::new(false);
        let reply = session.submit_user_message("I feel homesick").unwrap();

        session.toggle_anonymous();
        assert_eq!(session.pending_reply(), Some(&reply));
        assert!(session.awaiting_reply());
    }

    #[test]
    fn test_greeting_text_depends_on_starting_mode() {
        let anonymous = ConversationSession::new(true);
        let identified = ConversationSession::new(false);

        assert!(anonymous.messages()[0].text.contains("anonymous"));
        assert!(!identified.messages()[0].text.contains("anonymous"));
        assert_eq!(anonymous.messages()[0].sender, Sender::Bot);
    }
}
