//! Logging setup for the binary.
//!
//! Logs go to stderr; stdout carries the progress lines.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `debug` forces the `debug` level, otherwise
/// `RUST_LOG` decides, falling back to `warn`.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
