//! Log subscriber setup.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Builds the log filter: `RUST_LOG` when set, otherwise `default_filter`.
///
/// # Errors
///
/// Returns a `ParseError` if the fallback directive is invalid.
pub fn build_filter(default_filter: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// # Errors
///
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    let filter = build_filter(default_filter)
        .with_context(|| format!("invalid log filter \"{default_filter}\""))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")
}
