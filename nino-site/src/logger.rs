//! Logging setup
//!
//! Console-only tracing init; `RUST_LOG` overrides the default level.
//! The engine has no long-lived server process, so there is no file
//! rotation here - hosts embedding the engine bring their own sinks.

use tracing_subscriber::EnvFilter;

/// Initialize console logging at `default_level` unless `RUST_LOG` is set.
///
/// Safe to call once per process; a second call reports the collision.
pub fn init_logger(default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logger init failed: {e}"))
}
