//! Quick suggestions offered to the user before they type anything.

use serde::Serialize;

use super::classification::Priority;

/// A suggested prompt the front end can offer as a one-tap message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickSuggestion {
    pub text: &'static str,
    pub category: &'static str,
    pub priority: Priority,
}

const fn suggestion(text: &'static str, category: &'static str, priority: Priority) -> QuickSuggestion {
    QuickSuggestion {
        text,
        category,
        priority,
    }
}

pub const EMOTIONAL_SUGGESTIONS: [QuickSuggestion; 6] = [
    suggestion("I'm feeling overwhelmed with ILP", "wellness", Priority::High),
    suggestion("How do I cope with homesickness?", "wellness", Priority::Medium),
    suggestion("I'm anxious about assessments", "program", Priority::High),
    suggestion("How to connect with teammates?", "social", Priority::Medium),
    suggestion("I don't feel confident enough", "wellness", Priority::High),
    suggestion("Work-life balance tips", "wellness", Priority::Medium),
];

pub const GENERAL_SUGGESTIONS: [QuickSuggestion; 6] = [
    suggestion("What is the ILP program structure?", "program", Priority::Medium),
    suggestion("How to access learning materials?", "resources", Priority::Medium),
    suggestion("When is my training schedule?", "schedule", Priority::Medium),
    suggestion("I'm facing technical issues", "technical", Priority::High),
    suggestion("Mental health support", "wellness", Priority::Urgent),
    suggestion("Salary and benefits queries", "hr", Priority::High),
];

/// Wellness resources, most pressing first
pub const WELLNESS_RESOURCES: [(&str, Priority); 4] = [
    ("Employee Assistance Program", Priority::Urgent),
    ("Stress management techniques", Priority::High),
    ("Mindfulness and meditation", Priority::Medium),
    ("Building resilience", Priority::Medium),
];
