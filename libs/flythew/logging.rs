//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize tracing with standard configuration.
///
/// Honors `RUST_LOG` when set, defaults to `info` otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .init();
}
