//! Tracing subscriber setup for the binary
//!
//! Logs go to stderr so stdout only carries the prompt/result dialogue.
//! Verbosity follows RUST_LOG, falling back to `DEFAULT_LOG_FILTER`.

use tracing_subscriber::EnvFilter;

use crate::utils::constants::DEFAULT_LOG_FILTER;

/// Build the filter from RUST_LOG, or the default when unset/invalid
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global fmt subscriber
///
/// Uses `try_init` so a second call (e.g. from tests) is a no-op instead of a panic.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}
