use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory the binaries write their logs to.
pub const LOG_DIR: &str = "logs";

/// Installs a file-backed subscriber. Filtering follows `RUST_LOG`, defaulting to `info`.
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init_logging(file_name: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(LOG_DIR, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed, e.g. when called twice
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    guard
}
