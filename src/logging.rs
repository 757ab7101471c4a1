//! Logging utilities for climplot.
//!
//! The library itself only emits `tracing` events; applications that want
//! to see them install a subscriber with [`init_tracing`].

use std::time::Instant;
use tracing::{debug, error};

use crate::error::ClimplotError;

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`. Calling this
/// more than once is harmless: later calls leave the first subscriber in
/// place.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();

    if installed.is_err() {
        debug!("Tracing subscriber already installed");
    }
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();

    debug!(operation = operation, "Starting operation");

    let result = f();

    let duration = start.elapsed();

    debug!(
        operation = operation,
        duration_ms = duration.as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log an error with context
pub fn log_error(error: &ClimplotError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}
