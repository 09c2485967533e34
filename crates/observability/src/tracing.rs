//! Logging initialization.
//!
//! JSON lines on stdout, filtered via `RUST_LOG` (default `info`).
//! Reconciliation warnings come out at `warn`, failed rollbacks at `error`;
//! `RUST_LOG` is the only logging configuration surface the workspace has.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops), so test
/// binaries can call it from every entry point.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
