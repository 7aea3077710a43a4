//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_VAR: &str = "WAREHOUSE_LOG_FORMAT";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }

    /// Read `WAREHOUSE_LOG_FORMAT`; see [`LogFormat::resolve`].
    pub fn from_env() -> (Self, Option<String>) {
        Self::resolve(std::env::var(LOG_FORMAT_VAR).ok())
    }

    /// Pick the format for an optional raw setting.
    ///
    /// Unset means the default. An unknown value also falls back to the
    /// default and is handed back so it can be reported once logging is up.
    pub fn resolve(value: Option<String>) -> (Self, Option<String>) {
        match value {
            None => (Self::default(), None),
            Some(raw) => match Self::parse(&raw) {
                Some(format) => (format, None),
                None => (Self::default(), Some(raw)),
            },
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Filter comes from `RUST_LOG` (default `info`). Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
    };
}
