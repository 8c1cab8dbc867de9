use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the caller provides one.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the tracing subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Stream the subscriber writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogTarget {
    #[default]
    Stdout,
    /// Keeps stdout free for program output.
    Stderr,
}

impl LogTarget {
    fn writer(self) -> BoxMakeWriter {
        match self {
            LogTarget::Stdout => BoxMakeWriter::new(io::stdout),
            LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

/// `RUST_LOG` wins; then the caller's filter; then [`DEFAULT_FILTER`].
fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)))
}

/// Initialize tracing subscriber with compact output on stdout.
/// Repeated calls are ignored.
pub fn init_logging_default(fallback: Option<&str>) {
    init_logging_to(LogFormat::Compact, LogTarget::Stdout, fallback);
}

/// Initialize tracing subscriber with JSON structured output on stdout.
/// Repeated calls are ignored.
pub fn init_logging_json(fallback: Option<&str>) {
    init_logging_to(LogFormat::Json, LogTarget::Stdout, fallback);
}

pub fn init_logging(format: LogFormat, fallback: Option<&str>) {
    init_logging_to(format, LogTarget::Stdout, fallback);
}

/// Initialize tracing subscriber writing to `target`.
/// Repeated calls are ignored.
pub fn init_logging_to(format: LogFormat, target: LogTarget, fallback: Option<&str>) {
    let builder = fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .with_writer(target.writer());
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
