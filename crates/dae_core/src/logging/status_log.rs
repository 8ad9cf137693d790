//! User-facing status log with optional run file output.
//!
//! The status log:
//! - Keeps every line shown in the log panel
//! - Mirrors each line to `tracing` at the line's level
//! - Optionally writes the lines of one run to a dedicated log file

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use super::types::{LogConfig, LogLevel, StatusLine};

/// Status lines for the log panel, with an optional run log file.
pub struct StatusLog {
    /// Lines in display order.
    lines: Mutex<Vec<String>>,
    /// Writer for the current run's log file, if any.
    file_writer: Mutex<Option<BufWriter<File>>>,
    /// Path of the current run's log file.
    run_log_path: Mutex<Option<PathBuf>>,
    config: LogConfig,
}

impl StatusLog {
    pub fn new(config: LogConfig) -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            file_writer: Mutex::new(None),
            run_log_path: Mutex::new(None),
            config,
        }
    }

    /// Record a status line.
    ///
    /// Every line is shown and written to the run file. The `tracing`
    /// mirror is filtered by the application log level.
    pub fn push(&self, line: &StatusLine) {
        let message = line.to_string();

        match line.level() {
            LogLevel::Error => tracing::error!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Trace => tracing::trace!("{}", message),
        }

        let formatted = self.format_message(&message);

        if let Some(ref mut writer) = *self.file_writer.lock() {
            let _ = writeln!(writer, "{}", formatted);
        }

        self.lines.lock().push(formatted);
    }

    /// Snapshot of all lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All lines joined for display.
    pub fn text(&self) -> String {
        let lines = self.lines.lock();
        let mut text = lines.join("\n");
        if !lines.is_empty() {
            text.push('\n');
        }
        text
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Clear the displayed lines. The run file is left untouched.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    /// Start writing lines to a new `run_<timestamp>.log` under `log_dir`.
    ///
    /// Any previous run file is flushed and closed first.
    pub fn open_run_file(&self, log_dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir)?;

        self.close_run_file();

        let stamp = Local::now().format("%Y%m%d_%H%M%S%.3f");
        let log_path = log_dir.join(format!("run_{}.log", stamp));
        let file = File::create(&log_path)?;

        *self.file_writer.lock() = Some(BufWriter::new(file));
        *self.run_log_path.lock() = Some(log_path.clone());

        tracing::debug!("Run log: {}", log_path.display());
        Ok(log_path)
    }

    /// Path of the open run file, if any.
    pub fn run_log_path(&self) -> Option<PathBuf> {
        self.run_log_path.lock().clone()
    }

    /// Flush the run file.
    pub fn flush(&self) {
        if let Some(ref mut writer) = *self.file_writer.lock() {
            let _ = writer.flush();
        }
    }

    /// Flush and close the run file.
    pub fn close_run_file(&self) {
        self.flush();
        *self.file_writer.lock() = None;
        *self.run_log_path.lock() = None;
    }

    /// Format a message with timestamp (if enabled).
    fn format_message(&self, message: &str) -> String {
        if self.config.show_timestamps {
            let timestamp = Local::now().format("%H:%M:%S");
            format!("[{}] {}", timestamp, message)
        } else {
            message.to_string()
        }
    }
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

impl Drop for StatusLog {
    fn drop(&mut self) {
        self.close_run_file();
    }
}
