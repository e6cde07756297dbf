//! Tracing/logging setup shared by binaries and test harnesses that embed
//! the allocation domain crates.
//!
//! The domain crates themselves only emit through the `tracing` facade;
//! wiring a subscriber is the job of whatever process hosts them.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
