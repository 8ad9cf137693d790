//! DAE Fixer - Main entry point
//!
//! This is the application entry point using iced. It handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - Application launch

use std::path::PathBuf;

use dae_core::config::ConfigManager;
use dae_core::logging::init_tracing_with_file;

mod app;
mod handlers;
mod pages;
mod theme;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for logs directory path)
    let config_path = default_config_path();
    let mut config = ConfigManager::new(&config_path);

    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    let logs_dir = config.logs_folder();
    let _log_guard = init_tracing_with_file(config.settings().logging.level, &logs_dir);

    tracing::info!("DAE Fixer starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", dae_core::version());

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("DAE Fixer")
        .window_size((560.0, 480.0))
        .subscription(App::subscription)
        .run()
}
