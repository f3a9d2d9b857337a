//! # ILP Companion
//!
//! Emotionally-aware triage assistant for onboarding-program support. A user
//! writes free text; the companion detects emotional signals, picks a templated
//! reply and delivers it after a short, type-dependent delay. A remote backend
//! can answer instead, with the local engine as fallback.
//!
//! ## Modules
//! - `brain`: lexicon, classifier, response templates, wellness check-in
//! - `session`: conversation state machine and reply timer
//! - `actors`: session actor, backend transport, speech capability
//! - `config`, `telemetry`, `error`: ambient plumbing

pub mod actors;
pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod telemetry;

#[cfg(test)]
mod tests;
