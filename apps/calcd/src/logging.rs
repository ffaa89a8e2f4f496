//! Logging initialization: stdout layer plus an optional JSON file layer.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Initialize the tracing registry.
///
/// Filter precedence: `-v` flags, then `RUST_LOG`, then the configured
/// level. The returned guard must be held for the lifetime of the process;
/// dropping it stops the non-blocking file writer.
pub fn init(config: &LoggingConfig, verbosity: u8) -> Option<WorkerGuard> {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.clone())),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    match &config.file {
        Some(path) => {
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty());
            let file_name = path.file_name().map_or_else(
                || std::ffi::OsString::from("calculator.log"),
                std::ffi::OsStr::to_os_string,
            );
            let appender = tracing_appender::rolling::never(
                directory.unwrap_or_else(|| std::path::Path::new(".")),
                file_name,
            );
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().json().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}
