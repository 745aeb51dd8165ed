//! Logging setup shared by Sheltra binaries.

/// Tracing subscriber configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, init, init_with};
