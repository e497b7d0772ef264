//! Log output.
//!
//! Logs go to stderr so they never interleave with the transcript on
//! stdout. Filter directives come from `--log`, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`].

use std::io;

use rogerian_foundation::{Error, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter used when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from explicit directives or the environment.
///
/// # Errors
///
/// Returns an error if explicit directives do not parse. A malformed
/// `RUST_LOG` falls back to [`DEFAULT_FILTER`].
pub fn filter(directives: Option<&str>) -> Result<EnvFilter> {
    match directives {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            Error::invalid_argument(format!("invalid log filter '{directives}': {e}"))
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already
/// installed.
pub fn init(directives: Option<&str>) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter(directives)?)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::internal(format!("failed to install logger: {e}")))
}
