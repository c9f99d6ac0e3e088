//! Structured logging infrastructure for Triagem.
//!
//! The engine itself only emits `tracing` events; this module is the opt-in
//! way for a host process to install a subscriber for them, based on
//! [`LoggingConfig`].

mod formatters;

pub use formatters::DevelopmentFormatter;
pub use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::fmt::MakeWriter;

/// Error type for logging operations
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing log level
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Error in subscriber setup
    #[error("Subscriber error: {0}")]
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
///
/// When a log file is configured and stdout is disabled, events go to the
/// file through a non-blocking writer whose guard is returned; keep it alive
/// for as long as logs should be flushed. A global subscriber that is already
/// installed is left in place and reported as success.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = log_level_to_level(config.level);

    let result = match (&config.file, config.stdout) {
        (Some(file_path), false) => {
            let (writer, guard) = create_non_blocking_file(file_path)?;
            init_with_writer(level, config.format, writer).map(|_| Some(guard))
        }
        (_, true) => init_with_writer(level, config.format, std::io::stdout).map(|_| None),
        (None, false) => Ok(None),
    };

    match result {
        Err(LogError::SubscriberError(ref e)) if is_already_set(e.as_ref()) => Ok(None),
        other => other,
    }
}

fn is_already_set(err: &(dyn std::error::Error + Send + Sync)) -> bool {
    // Both the dispatcher and the log bridge report "already been set/initialized"
    err.to_string().contains("already")
}

/// Install a fmt subscriber for the given format on the given writer.
fn init_with_writer<W>(level: Level, format: LogFormat, writer: W) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_target(true)
        .with_line_number(true);

    match format {
        LogFormat::Json => builder.json().with_thread_ids(true).try_init()?,
        LogFormat::Compact => builder.compact().try_init()?,
        LogFormat::Pretty => builder.pretty().try_init()?,
        LogFormat::Default => builder.event_format(DevelopmentFormatter).try_init()?,
    }

    Ok(())
}

/// Create a non-blocking file writer.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<(NonBlocking, WorkerGuard)> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("log path has no file name: {}", path.display()),
        )
    })?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_appender = tracing_appender::rolling::never(directory, file_name);

    Ok(tracing_appender::non_blocking(file_appender))
}

/// Convert a LogLevel into the matching tracing::Level.
pub fn log_level_to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level
        .parse::<LogLevel>()
        .map_err(|_| LogError::InvalidLogLevel(level.to_string()))
}

/// Convert a tracing::Level to a LogLevel enum.
pub fn level_to_log_level(level: Level) -> LogLevel {
    match level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}
