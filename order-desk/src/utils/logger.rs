//! Logging Infrastructure
//!
//! Stdout belongs to the operator, so log lines go to stderr, or to a daily
//! rolling file when a log directory is configured and exists.

use std::path::Path;

use crate::core::Config;

/// Initialize the logger from configuration
pub fn init_logger(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir().as_deref());
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("warn");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::WARN))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir
        && dir.exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "order-desk");
        subscriber.with_ansi(false).with_writer(file_appender).init();
        return;
    }

    subscriber.with_writer(std::io::stderr).init();
}
