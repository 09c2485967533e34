//! Shared logging setup for the back office.
//!
//! Engine operations log their outcomes and reconciliation warnings through
//! `tracing`; this crate owns the process-wide subscriber so every embedder
//! (tests included) gets the same output shape.

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filter, output format).
pub mod tracing;
