//! # Logging Initialization
//!
//! Structured logging via `tracing`. The filter comes from the
//! `IDLINK_LOG` environment variable when set, otherwise from the caller's
//! default.

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "IDLINK_LOG";

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; later calls are no-ops. `default_filter`
/// is a standard `EnvFilter` directive, e.g. `"info"` or
/// `"il_05_identity_manager=debug,info"`.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
