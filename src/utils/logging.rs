//! Logging initialization
//!
//! The field validators never log. Logging is for the request layer, which
//! emits `debug` events for rejected fields, and for the CLI.
//!
//! - Respects RUST_LOG environment variable
//! - Falls back to the config filter, then "info"
//!
//! # Usage
//! ```rust,no_run
//! use fractal_validation::utils::init_logging;
//!
//! init_logging(None); // Uses RUST_LOG or defaults to "info"
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Pick the filter: RUST_LOG, then the given filter, then "info"
fn resolve_filter(filter: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    EnvFilter::new(filter.unwrap_or("info"))
}

/// Initialize human-readable logging on stderr
///
/// # Arguments
/// * `filter` - Optional log filter from config (e.g., "info", "fractal_validation=debug").
///              RUST_LOG takes precedence when set.
pub fn init_logging(filter: Option<&str>) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()), // Respect NO_COLOR standard
        )
        .with(resolve_filter(filter))
        .init();
}

/// Initialize logging with JSON output (for log aggregation)
#[cfg(feature = "json-logging")]
pub fn init_json_logging(filter: Option<&str>) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(true)
                .with_span_list(true),
        )
        .with(resolve_filter(filter))
        .init();
}

/// Initialize logging from a [`LoggingConfig`]
///
/// `json_format` falls back to human-readable output when the `json-logging`
/// feature is off.
pub fn init_logging_from_config(config: &LoggingConfig) {
    let filter = config.filter.as_deref();

    if config.json_format {
        #[cfg(feature = "json-logging")]
        {
            init_json_logging(filter);
            return;
        }
    }

    init_logging(filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_filter_uses_given_filter() {
        // Installing a subscriber would clash with other tests; only the
        // filter resolution is exercised here.
        if std::env::var("RUST_LOG").is_err() {
            assert_eq!(resolve_filter(Some("debug")).to_string(), "debug");
            assert_eq!(resolve_filter(None).to_string(), "info");
        }
    }
}
