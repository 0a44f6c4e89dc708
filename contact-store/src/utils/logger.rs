//! Logging infrastructure
//!
//! Structured logging setup. The store itself only emits `tracing`
//! events; the embedding binary decides where they go by calling one of
//! the initializers below, once, at startup.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults (stderr, `info`, overridable via
/// `RUST_LOG`).
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an optional level and file output.
///
/// When `log_dir` names an existing directory, output goes to a daily
/// rolling file there instead of stderr.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && Path::new(dir).exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "contact-store");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
