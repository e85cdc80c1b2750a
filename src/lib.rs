pub mod advisor;
pub mod config;
pub mod connections;
pub mod contact;
pub mod dashboard;
pub mod error;
pub mod estimator;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod profile;
pub mod server;
pub mod signals;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `level`. A `format` of `"json"` selects
/// the JSON formatter, anything else the human-readable one.
///
/// Note: This function can only be called once.
pub fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}
