//! # Brain Module
//!
//! Deterministic, rule-based triage for incoming messages. This is the reference
//! engine used whenever no remote backend answers.
//!
//! ## Components
//! - `lexicon`: emotion categories and their trigger phrases
//! - `classifier`: keyword detection producing a `ClassificationResult`
//! - `classification`: output data structures
//! - `responses`: template ladder, greeting, mood acknowledgments, fallback notice
//! - `wellness`: stress-level check-in
//! - `suggestions`: canned prompts for the front end

pub mod classification;
pub mod classifier;
pub mod lexicon;
pub mod responses;
pub mod suggestions;
pub mod wellness;

pub use classification::{Category, ClassificationResult, Priority, ResponseType};
pub use classifier::MessageClassifier;
pub use lexicon::{EmotionTag, TriggerLexicon};
pub use responses::{mood_acknowledgment, ResponseKind, ResponseSelector, FALLBACK_NOTICE};
pub use suggestions::{QuickSuggestion, EMOTIONAL_SUGGESTIONS, GENERAL_SUGGESTIONS, WELLNESS_RESOURCES};
pub use wellness::{wellness_check, StressBand, WellnessCheck};
