//! Logging setup
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs, including ignored row operations
//! - `RUST_LOG=sheetgrid::grid=debug` - module-level filtering
//!
//! Logs are also written to `~/.config/sheetgrid/logs/sheetgrid.log` with
//! daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so exported CSV on stdout stays clean.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "sheetgrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
