//! Logging setup
//!
//! Console-only structured logging; operators observe the allowed/injected
//! trace through it. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with an env-filtered fmt layer
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(
    default_filter: &str,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
