//! Diagnostic logging to stderr.
//!
//! Stdout carries completion results (possibly as JSON for another
//! process), so every log line goes to stderr.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// `log_level` takes precedence over `RUST_LOG`. Calling this twice is
/// harmless; the second subscriber is ignored.
pub fn init_logger(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_filter(filter);

    // Already-set subscriber (tests, embedding) is not an error
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
