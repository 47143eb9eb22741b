//! Logging initialization for the CNAPP dashboard.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `CNAPP_LOG` environment variable. Falls back to the configured level
//! (`[log] level`, `info` by default) when the variable is unset or invalid.
//!
//! # Usage
//!
//! ```bash
//! # Debug level
//! CNAPP_LOG=debug cnapp-dash shell
//!
//! # Module-specific filtering
//! CNAPP_LOG=cnapp_dashboard::store=trace,warn cnapp-dash shell
//! ```

use crate::config::schema::LogLevel;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "CNAPP_LOG";

/// Builds the filter: `CNAPP_LOG` when it parses, otherwise `fallback`.
pub fn env_filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// Output is written to stderr so stdout stays free for command output.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(fallback: LogLevel) {
    let result = fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
