use crate::error::ConfigError;
use crate::settings::Config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`, which in turn falls back to the
/// environment's default level. Events always go to stderr so that stdout carries only
/// command output. When `logging.directory` is set, events are also written to a daily
/// rolling file there.
///
/// The returned guard flushes the file writer on drop and must be held until exit.
///
/// # Errors
///
/// `ConfigError::LoggingError` for an invalid level directive, a log directory that
/// cannot be created or written, or a subscriber that is already installed.
pub fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>, ConfigError> {
    let level = config.logging.effective_level(config.environment);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| ConfigError::LoggingError(format!("invalid log level '{level}': {e}")))?;

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match &config.logging.directory {
        Some(directory) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(config.logging.file_prefix.as_str())
                .build(directory)
                .map_err(|e| {
                    ConfigError::LoggingError(format!("cannot log to {}: {e}", directory.display()))
                })?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    tracing::debug!(
        environment = %config.environment,
        log_level = level,
        "Tracing initialized."
    );

    Ok(guard)
}
