use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Default filter when `RUST_LOG` is unset; command output stays clean.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global fmt subscriber, writing to stderr so stdout carries
/// only command output. A second call is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
