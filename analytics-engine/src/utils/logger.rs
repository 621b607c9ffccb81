//! Logging Infrastructure
//!
//! Structured logging setup shared by the examples and any embedding binary.
//!
//! Environment variables:
//! - `ANALYTICS_LOG_LEVEL`: trace / debug / info / warn / error (default: info)
//! - `ANALYTICS_LOG_DIR`: when set to an existing directory, logs also roll
//!   daily into `<dir>/analytics-engine.<date>`

use std::path::Path;

/// Initialize the logger from environment variables
pub fn init_logger() {
    let level = std::env::var("ANALYTICS_LOG_LEVEL").ok();
    let dir = std::env::var("ANALYTICS_LOG_DIR").ok();
    init_logger_with_file(level.as_deref(), dir.as_deref());
}

/// Initialize the logger with an explicit level and optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "analytics-engine");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
