//! Structured logging setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initializes stderr logging.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` applies.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed
pub fn init_logging(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized");

    Ok(())
}
