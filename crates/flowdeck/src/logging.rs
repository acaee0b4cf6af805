//! Logging setup for the FlowDeck binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the console tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
