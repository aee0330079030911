//! Tracing subscriber setup.

use faultline_error::{FaultlineResult, TracingError, TracingErrorKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs a global fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// # Errors
///
/// Returns an error if `RUST_LOG` holds an invalid directive or a global
/// subscriber is already installed.
pub fn init_tracing() -> FaultlineResult<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_string());
    init_tracing_with(&directives)
}

/// Installs a global fmt subscriber with explicit filter directives.
///
/// # Errors
///
/// Returns an error if `directives` cannot be parsed or a global subscriber
/// is already installed.
pub fn init_tracing_with(directives: &str) -> FaultlineResult<()> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| TracingError::new(TracingErrorKind::InvalidFilter(e.to_string())))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TracingError::new(TracingErrorKind::AlreadyInstalled(e.to_string())))?;

    Ok(())
}
