//! Process-wide logging setup for QR-bill binaries.
//!
//! Libraries only emit `tracing` events; binaries call [`init`] once at startup.

/// Initialize tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
