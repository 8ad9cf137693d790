//! Configuration management for DAE Fixer.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use dae_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Output suffix: {}", config.settings().output.suffix);
//!
//! // Remember the last folder
//! config.settings_mut().paths.last_folder = "/models".to_string();
//!
//! // Save just the paths section atomically
//! config.update_section(ConfigSection::Paths).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, OutputSettings, PathSettings, Settings};
