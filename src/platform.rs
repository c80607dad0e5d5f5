//! Process-level services: logging setup, frame pacing and entropy.

use std::time::Duration;

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::error::PlatformError;
use crate::formatter::TickFormatter;

/// Sleeps until the next frame. Spinning gives tighter pacing than the OS scheduler alone.
pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default `debug` filter.
pub fn init_console() -> Result<(), PlatformError> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().event_format(TickFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlatformError::ConsoleInit(format!("Failed to set tracing subscriber: {}", e)))
}

/// A fresh seed for sessions started without one.
pub fn random_seed() -> u64 {
    rand::random()
}
