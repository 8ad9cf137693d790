//! Logging infrastructure for DAE Fixer.
//!
//! This module provides:
//! - Application-wide `tracing` setup (stderr, plus a rolling file)
//! - `StatusLog`: the user-facing lines shown in the log panel
//! - `StatusLine`: the fixed set of status messages
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use dae_core::logging::{LogConfig, StatusLine, StatusLog};
//!
//! let log = StatusLog::new(LogConfig::default());
//! log.open_run_file(".logs").unwrap();
//! log.push(&StatusLine::Processed(PathBuf::from("ship.dae")));
//! log.push(&StatusLine::Completed(1));
//! ```

mod status_log;
mod types;

pub use status_log::StatusLog;
pub use types::{LogConfig, LogLevel, StatusLine};

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for the daily application log.
const APP_LOG_PREFIX: &str = "dae-fixer.log";

/// Initialize tracing with stderr output plus a daily-rolling file in `logs_dir`.
///
/// Respects `RUST_LOG` and falls back to `default_level`. Call once at
/// startup.
///
/// Returns the file writer's guard; keep it alive for the whole program or
/// buffered lines are lost. Falls back to stderr only if the directory
/// cannot be created.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    let (file_layer, guard) = match fs::create_dir_all(logs_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(logs_dir, APP_LOG_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!(
                "Warning: Failed to create logs directory {}: {}",
                logs_dir.display(),
                e
            );
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(file_layer)
        .with(env_filter(default_level))
        .init();

    guard
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)))
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}
