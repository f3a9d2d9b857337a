//! Log subscriber set-up. Logs always go to stderr so they never interleave
//! with the conversation on stdout.

use crate::config::LogFormat;
use crate::error::AppError;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

const APP_NAME: &str = "ilp-companion";
const DEFAULT_FILTER: &str = "info";

/// Builds the subscriber for `format`, filtered by `RUST_LOG` (default `info`).
pub fn subscriber(format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = Registry::default().with(filter);

    match format {
        LogFormat::Pretty => Box::new(
            registry.with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            ),
        ),
        LogFormat::Json => Box::new(
            registry
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(APP_NAME.to_string(), std::io::stderr)),
        ),
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(format: LogFormat) -> Result<(), AppError> {
    tracing::subscriber::set_global_default(subscriber(format))
        .map_err(|e| AppError::Config(format!("Logging already initialised: {}", e)))
}
