//! Tracing/logging setup shared by the warehouse binaries.

/// Initialize process-wide logging using the format from `WAREHOUSE_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
/// An unknown format is reported as a warning after the subscriber is up.
pub fn init() {
    let (format, rejected) = LogFormat::from_env();
    tracing::init(format);
    if let Some(value) = rejected {
        ::tracing::warn!(
            var = tracing::LOG_FORMAT_VAR,
            value = %value,
            "unknown log format, using {format:?}"
        );
    }
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::LogFormat;
