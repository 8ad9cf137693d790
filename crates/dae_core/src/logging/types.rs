//! Logging types and configuration.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace-level debugging (very verbose).
    Trace,
    /// Debug information.
    Debug,
    /// General information.
    #[default]
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
}

/// Configuration for the status log.
///
/// Every status line is always kept; the application log level only
/// filters the `tracing` mirror.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Prefix lines with the time of day.
    pub show_timestamps: bool,
}

impl LogConfig {
    /// Configuration with timestamps on.
    pub fn with_timestamps() -> Self {
        Self {
            show_timestamps: true,
        }
    }
}

/// One user-facing status line.
///
/// `Display` renders the exact text shown in the log panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// A candidate file was collected from a drop.
    Added(PathBuf),
    /// A file was stripped and written.
    Processed(PathBuf),
    /// A file failed; the batch continues.
    Failed { path: PathBuf, message: String },
    /// The batch finished after handling this many files.
    Completed(usize),
    /// Nothing valid was selected or dropped.
    NoValidFiles,
    /// The pending file list was reset.
    Cleared,
}

impl StatusLine {
    /// Level the line is logged at.
    pub fn level(&self) -> LogLevel {
        match self {
            StatusLine::Failed { .. } => LogLevel::Error,
            StatusLine::NoValidFiles => LogLevel::Warn,
            _ => LogLevel::Info,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Added(path) => write!(f, "Added: {}", path.display()),
            StatusLine::Processed(path) => write!(f, "Processed: {}", path.display()),
            StatusLine::Failed { path, message } => {
                write!(f, "Error processing {}: {}", path.display(), message)
            }
            StatusLine::Completed(count) => write!(f, "Processed {} file(s).", count),
            StatusLine::NoValidFiles => write!(
                f,
                "Please select a valid .dae file or directory containing .dae files."
            ),
            StatusLine::Cleared => write!(f, "File list cleared."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_render_exact_text() {
        assert_eq!(
            StatusLine::Processed(PathBuf::from("/m/a.dae")).to_string(),
            "Processed: /m/a.dae"
        );
        assert_eq!(
            StatusLine::Added(PathBuf::from("/m/b.dae")).to_string(),
            "Added: /m/b.dae"
        );
        assert_eq!(
            StatusLine::Failed {
                path: PathBuf::from("/m/c.dae"),
                message: "denied".to_string()
            }
            .to_string(),
            "Error processing /m/c.dae: denied"
        );
        assert_eq!(StatusLine::Completed(3).to_string(), "Processed 3 file(s).");
    }

    #[test]
    fn failures_log_as_errors() {
        let failed = StatusLine::Failed {
            path: PathBuf::from("x.dae"),
            message: String::new(),
        };
        assert_eq!(failed.level(), LogLevel::Error);
        assert_eq!(StatusLine::NoValidFiles.level(), LogLevel::Warn);
        assert_eq!(StatusLine::Cleared.level(), LogLevel::Info);
    }
}
