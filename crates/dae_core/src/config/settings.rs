//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::{LogConfig, LogLevel};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Output naming.
    #[serde(default)]
    pub output: OutputSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Log folder and remembered picker paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for application and run log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,

    /// Last file chosen in the file picker.
    #[serde(default)]
    pub last_file: String,

    /// Last folder chosen in the folder picker.
    #[serde(default)]
    pub last_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
            last_file: String::new(),
            last_folder: String::new(),
        }
    }
}

/// Where stripped files are written and how they are named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Appended to the input's base name: `ship.dae` -> `ship_fixed.dae`.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Directory created next to the first input for multi-file drops.
    #[serde(default = "default_shared_dir_name")]
    pub shared_dir_name: String,

    /// Put outputs of multi-file drops into the shared directory.
    #[serde(default = "default_true")]
    pub shared_dir_for_drops: bool,
}

fn default_suffix() -> String {
    "_fixed".to_string()
}

fn default_shared_dir_name() -> String {
    "fixed_output".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            shared_dir_name: default_shared_dir_name(),
            shared_dir_for_drops: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level for application logs (overridden by `RUST_LOG`).
    #[serde(default)]
    pub level: LogLevel,

    /// Prefix status lines with the time of day.
    #[serde(default)]
    pub show_timestamps: bool,

    /// Write each run's status lines to a file in the logs folder.
    #[serde(default = "default_true")]
    pub write_run_log: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            show_timestamps: false,
            write_run_log: true,
        }
    }
}

impl LoggingSettings {
    /// Status log configuration derived from these settings.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            show_timestamps: self.show_timestamps,
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    Output,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::Paths,
        ConfigSection::Output,
        ConfigSection::Logging,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Output => "output",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section in a generated file.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "# Log folder and last used inputs",
            ConfigSection::Output => "# Output file naming",
            ConfigSection::Logging => "# Logging configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[paths]"));
        assert!(toml.contains("[output]"));
        assert!(toml.contains("suffix = \"_fixed\""));
        assert!(toml.contains("level = \"info\""));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[output]\nsuffix = \"_clean\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.output.suffix, "_clean");
        // Defaults applied for missing
        assert_eq!(parsed.output.shared_dir_name, "fixed_output");
        assert!(parsed.output.shared_dir_for_drops);
        assert_eq!(parsed.paths.logs_folder, ".logs");
        assert!(parsed.logging.write_run_log);
    }

    #[test]
    fn log_config_follows_logging_section() {
        let logging = LoggingSettings {
            level: LogLevel::Debug,
            show_timestamps: true,
            write_run_log: false,
        };
        assert!(logging.log_config().show_timestamps);
    }
}
