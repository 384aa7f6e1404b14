//! Diagnostic logging setup for the `passvault` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is
//! the binary's job. Events never carry passwords, keys or secrets.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `passvault=debug`).
pub const LOG_ENV: &str = "PASSVAULT_LOG";

/// Install a stderr subscriber filtered by `PASSVAULT_LOG` (default: `warn`).
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
