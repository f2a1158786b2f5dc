//! # Logging
//!
//! Installs a `tracing-subscriber` formatter on stderr. stdout is reserved
//! for `Vector3D(...)` lines.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use vectra_core::{VectorError, VectorResult};

/// Parses a filter directive such as `"info"` or `"vectra_core=trace"`.
///
/// # Errors
///
/// [`VectorError::InvalidConfig`] if the directive does not parse.
pub fn parse_filter(directive: &str) -> VectorResult<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| VectorError::InvalidConfig(format!("log_filter {directive:?}: {e}")))
}

/// Colour escapes only when stderr is an interactive terminal.
#[must_use]
pub fn use_ansi() -> bool {
    std::io::stderr().is_terminal()
}

/// Installs the global subscriber.
///
/// Returns `Ok(false)` if a subscriber was already installed, which leaves the
/// existing one in place.
///
/// # Errors
///
/// [`VectorError::InvalidConfig`] if the filter directive does not parse.
pub fn init(directive: &str) -> VectorResult<bool> {
    let filter = parse_filter(directive)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi())
        .with_target(false)
        .try_init()
        .is_ok();
    Ok(installed)
}
