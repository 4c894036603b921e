//! Tracing setup shared by the binary and the demos.

use crate::core::domain::error::{GridError, GridResult};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Build the filter: `RUST_LOG` wins over the configured default
pub fn filter(default: &str) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(raw) if !raw.trim().is_empty() => EnvFilter::builder().parse_lossy(raw),
        _ => EnvFilter::builder().parse_lossy(default),
    }
}

/// Install the global subscriber. Logs go to stderr so that tables printed
/// on stdout stay clean.
pub fn init_tracing<E: Into<EnvFilter>>(filter: E) -> GridResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| GridError::Config(format!("failed to install tracing subscriber: {}", e)))
}
