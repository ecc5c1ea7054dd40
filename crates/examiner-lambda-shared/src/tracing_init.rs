//! Tracing initialization for Lambda functions.
//!
//! Configures JSON-formatted tracing output for CloudWatch Logs. This
//! covers runtime-level diagnostics (startup, the Lambda runtime's own
//! events); per-invocation application logging goes through
//! [`crate::Logger`] instead.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with JSON formatting for CloudWatch Logs.
///
/// Call once at the start of the Lambda `main` function, before
/// `lambda_runtime::run()`. The filter is controlled via the `RUST_LOG`
/// environment variable and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    // Subscriber installation is process-global, so exercising it in unit
    // tests would poison every other test. Covered by running the handlers.
}
