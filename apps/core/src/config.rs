//! Runtime configuration, read from the environment.

use crate::error::AppError;
use crate::session::ReplyDelays;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use url::Url;
use validator::Validate;

pub const ENV_BACKEND_URL: &str = "COMPANION_BACKEND_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "COMPANION_REQUEST_TIMEOUT_SECS";
pub const ENV_EMOTIONAL_DELAY_MS: &str = "COMPANION_EMOTIONAL_DELAY_MS";
pub const ENV_INFORMATIONAL_DELAY_MS: &str = "COMPANION_INFORMATIONAL_DELAY_MS";
pub const ENV_FALLBACK_DELAY_MS: &str = "COMPANION_FALLBACK_DELAY_MS";
pub const ENV_ANONYMOUS: &str = "COMPANION_ANONYMOUS";
pub const ENV_VOICE: &str = "COMPANION_VOICE";
pub const ENV_LOG_FORMAT: &str = "COMPANION_LOG_FORMAT";

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}', expected pretty or json", other)),
        }
    }
}

/// Companion settings. Every field has a default, so an empty environment
/// yields a local-only session with the standard reply delays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Root of the remote support backend. Unset means local engine only.
    #[validate(url)]
    pub backend_url: Option<String>,
    #[validate(range(min = 1, max = 120))]
    pub request_timeout_secs: u64,
    #[validate(range(max = 60000))]
    pub emotional_delay_ms: u64,
    #[validate(range(max = 60000))]
    pub informational_delay_ms: u64,
    #[validate(range(max = 60000))]
    pub fallback_delay_ms: u64,
    pub start_anonymous: bool,
    pub voice_enabled: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        let delays = ReplyDelays::default();
        Self {
            backend_url: None,
            request_timeout_secs: 10,
            emotional_delay_ms: delays.emotional.as_millis() as u64,
            informational_delay_ms: delays.informational.as_millis() as u64,
            fallback_delay_ms: delays.fallback.as_millis() as u64,
            start_anonymous: true,
            voice_enabled: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Reads and validates the configuration from process environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            backend_url: std::env::var(ENV_BACKEND_URL)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            request_timeout_secs: env_or(ENV_REQUEST_TIMEOUT_SECS, defaults.request_timeout_secs)?,
            emotional_delay_ms: env_or(ENV_EMOTIONAL_DELAY_MS, defaults.emotional_delay_ms)?,
            informational_delay_ms: env_or(
                ENV_INFORMATIONAL_DELAY_MS,
                defaults.informational_delay_ms,
            )?,
            fallback_delay_ms: env_or(ENV_FALLBACK_DELAY_MS, defaults.fallback_delay_ms)?,
            start_anonymous: env_flag(ENV_ANONYMOUS, defaults.start_anonymous)?,
            voice_enabled: env_flag(ENV_VOICE, defaults.voice_enabled)?,
            log_format: env_or(ENV_LOG_FORMAT, defaults.log_format)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parsed backend root, normalised with a trailing slash so endpoint paths
    /// join beneath it.
    pub fn backend_url(&self) -> Result<Option<Url>, AppError> {
        let Some(raw) = self.backend_url.as_deref() else {
            return Ok(None);
        };
        let mut url = Url::parse(raw)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Some(url))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn delays(&self) -> ReplyDelays {
        ReplyDelays {
            emotional: Duration::from_millis(self.emotional_delay_ms),
            informational: Duration::from_millis(self.informational_delay_ms),
            fallback: Duration::from_millis(self.fallback_delay_ms),
        }
    }
}

fn env_or<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}: {}", name, e))),
        _ => Ok(default),
    }
}

fn env_flag(name: &str, default: bool) -> Result<bool, AppError> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(AppError::Config(format!("{}: '{}' is not a boolean", name, other))),
        },
        _ => Ok(default),
    }
}
