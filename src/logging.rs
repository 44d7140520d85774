use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "weather_agent_server=debug,tower_http=debug";

/// Keeps the file writer flushing; hold it until shutdown.
pub struct LoggerGuard(#[allow(dead_code)] Option<WorkerGuard>);

/// Console logging plus a daily `<prefix>.<date>.log` file in `log_dir`.
/// Falls back to console only when the directory is unusable.
pub fn init_logging(log_dir: impl AsRef<Path>, prefix: &str) -> LoggerGuard {
    let log_dir = log_dir.as_ref();

    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let file_appender = std::fs::create_dir_all(log_dir)
        .map_err(|e| e.to_string())
        .and_then(|_| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .build(log_dir)
                .map_err(|e| e.to_string())
        });

    match file_appender {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(fmt::layer().with_filter(filter()))
                .with(fmt::layer().with_writer(writer).with_ansi(false).with_filter(filter()))
                .init();
            LoggerGuard(Some(guard))
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_filter(filter()))
                .init();
            tracing::warn!("File logging disabled, cannot use {:?}: {}", log_dir, e);
            LoggerGuard(None)
        }
    }
}
