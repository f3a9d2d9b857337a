//! Speech I/O capabilities.
//!
//! A capability object is owned by the session and injected at construction;
//! there is no process-wide speech engine. Each utterance is a scoped child
//! process: starting a new one, calling `stop`, or dropping the capability
//! always terminates the previous one.

use crate::actors::traits::SpeechCapability;
use crate::error::AppError;
use async_trait::async_trait;
use regex::Regex;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::{LazyLock, Mutex};
use tokio::process::{Child, Command};
use tracing::{debug, error, info};

/// Host text-to-speech binaries, most preferred first
const TTS_PROGRAMS: [&str; 3] = ["espeak-ng", "espeak", "say"];

// NOTE: expect() is acceptable here, the patterns are literals
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\u{FE0F}\u{200D}]").expect("Invalid regex: emoji")
});
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid regex: bold markdown"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("Invalid regex: italic markdown"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace"));

/// Strip emoji and markdown emphasis and collapse whitespace so a reply reads well aloud.
pub fn clean_text_for_speech(text: &str) -> String {
    let text = EMOJI.replace_all(text, "");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Capability for hosts with no speech support at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpeech;

#[async_trait]
impl SpeechCapability for NoSpeech {
    fn supports_synthesis(&self) -> bool {
        false
    }

    fn supports_recognition(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str) -> Result<(), AppError> {
        Err(AppError::UnsupportedCapability(
            "Speech synthesis is not available on this host".to_string(),
        ))
    }

    fn stop(&self) {}

    fn is_speaking(&self) -> bool {
        false
    }

    async fn listen(&self) -> Result<Option<String>, AppError> {
        Err(AppError::UnsupportedCapability(
            "Speech recognition is not available on this host".to_string(),
        ))
    }
}

/// A running utterance. Dropping it stops playback.
struct Utterance {
    child: Child,
}

impl Drop for Utterance {
    fn drop(&mut self) {
        // start_kill() is non-blocking and needs no async context
        match self.child.start_kill() {
            Ok(_) => debug!("Utterance stopped"),
            Err(e) => debug!("Utterance already finished: {}", e),
        }
    }
}

/// Speech synthesis through a host text-to-speech program.
///
/// Recognition is not available on a terminal host.
pub struct CommandSpeech {
    program: PathBuf,
    current: Mutex<Option<Utterance>>,
}

impl CommandSpeech {
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            current: Mutex::new(None),
        }
    }

    /// Looks for a known text-to-speech binary in PATH.
    pub fn detect() -> Option<Self> {
        TTS_PROGRAMS.iter().find_map(|name| match which::which(name) {
            Ok(path) => {
                info!("Using {:?} for speech synthesis", path);
                Some(Self::new(path))
            }
            Err(_) => None,
        })
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Utterance>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SpeechCapability for CommandSpeech {
    fn supports_synthesis(&self) -> bool {
        true
    }

    fn supports_recognition(&self) -> bool {
        false
    }

    fn speak(&self, text: &str) -> Result<(), AppError> {
        let cleaned = clean_text_for_speech(text);
        let mut slot = self.slot();
        // stop-then-start
        slot.take();
        if cleaned.is_empty() {
            return Ok(());
        }

        let child = Command::new(&self.program)
            .arg(&cleaned)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                error!("Failed to start {:?}: {}", self.program, e);
                AppError::UnsupportedCapability(format!("Speech synthesis failed to start: {}", e))
            })?;

        *slot = Some(Utterance { child });
        Ok(())
    }

    fn stop(&self) {
        self.slot().take();
    }

    fn is_speaking(&self) -> bool {
        match self.slot().as_mut() {
            Some(utterance) => matches!(utterance.child.try_wait(), Ok(None)),
            None => false,
        }
    }

    async fn listen(&self) -> Result<Option<String>, AppError> {
        Err(AppError::UnsupportedCapability(
            "Speech recognition is not available on a terminal host".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_for_speech() {
        let text = "Hi there! 🌟\n\nThis is **important** and *gentle*.   Take care 💙";
        assert_eq!(
            clean_text_for_speech(text),
            "Hi there! This is important and gentle. Take care"
        );
    }

    #[test]
    fn test_clean_text_can_be_empty() {
        assert_eq!(clean_text_for_speech("🤗 💙\n"), "");
    }

    #[tokio::test]
    async fn test_no_speech_reports_unsupported() {
        let speech = NoSpeech;
        assert!(matches!(speech.speak("hello"), Err(AppError::UnsupportedCapability(_))));
        assert!(matches!(speech.listen().await, Err(AppError::UnsupportedCapability(_))));
        speech.stop();
        assert!(!speech.is_speaking());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_speech_stops_previous_utterance() {
        // `sleep 30` stands in for a long utterance
        let Ok(sleep) = which::which("sleep") else {
            return;
        };
        let speech = CommandSpeech::new(sleep);

        speech.speak("30").unwrap();
        assert!(speech.is_speaking());

        speech.speak("30").unwrap();
        assert!(speech.is_speaking());

        speech.stop();
        assert!(!speech.is_speaking());
        assert!(matches!(speech.listen().await, Err(AppError::UnsupportedCapability(_))));
    }

    #[tokio::test]
    async fn test_missing_program_is_unsupported() {
        let speech = CommandSpeech::new(PathBuf::from("/nonexistent/tts-binary"));
        assert!(matches!(speech.speak("hello"), Err(AppError::UnsupportedCapability(_))));
        assert!(!speech.is_speaking());
    }
}
