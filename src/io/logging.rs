//! Diagnostic logging to stderr

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Install a stderr subscriber; `RUST_LOG` overrides the default level
///
/// Safe to call more than once: later calls leave the first subscriber in
/// place.
pub fn init(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
