//! Tracing initialization.
//!
//! The engine only emits events; whether and how to collect them is the
//! embedding build's decision, made explicit through this entry point.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the default filter.
pub const LOG_ENV_VAR: &str = "FWPATCH_LOG";

/// Install a global fmt subscriber.
///
/// `filter` takes precedence over `FWPATCH_LOG`; with neither set the level
/// is "info". A second call is a no-op when a subscriber is already
/// installed.
pub fn init_tracing(filter: Option<&str>) {
    let env_filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
