//! Tracing setup for embedders and tests.

use tracing_subscriber::EnvFilter;

/// Install the default subscriber: env-filtered, writing to stderr. Safe to
/// call more than once; later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
