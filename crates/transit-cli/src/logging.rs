//! Logging setup for the CLI.
//!
//! Logs always go to stderr so that stdout carries only query results. The
//! level comes from `RUST_LOG` (default `info`); `--log-format` picks between
//! human-readable and JSON lines.

use clap::ValueEnum;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text logging.
    #[default]
    Text,
    /// JSON structured logging, one object per line.
    Json,
}

/// Default filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let registry = tracing_subscriber::registry().with(filter);

    let _ = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .try_init(),
    };
}
