//! Logging Infrastructure

use tracing_subscriber::EnvFilter;

/// Initialize console logging.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logger(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .init();
}
