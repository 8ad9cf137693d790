//! File browsing and drop handlers.

use std::path::{Path, PathBuf};

use iced::Task;

use dae_core::collect::DroppedPaths;
use dae_core::config::ConfigSection;

use super::helpers::clean_file_url;
use crate::app::{App, Message};

impl App {
    /// Browse for a single DAE file.
    pub fn browse_file(&self) -> Task<Message> {
        let start_dir = dialog_start_dir(&self.file_path);

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_title("Select DAE File")
                    .add_filter("DAE files", &["dae", "DAE"])
                    .add_filter("All Files", &["*"]);
                if let Some(dir) = start_dir {
                    dialog = dialog.set_directory(dir);
                }
                dialog.pick_file().await.map(|f| f.path().to_path_buf())
            },
            Message::FileSelected,
        )
    }

    /// Browse for a folder to process recursively.
    pub fn browse_folder(&self) -> Task<Message> {
        let start_dir = dialog_start_dir(&self.folder_path);

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new().set_title("Select Folder");
                if let Some(dir) = start_dir {
                    dialog = dialog.set_directory(dir);
                }
                dialog.pick_folder().await.map(|f| f.path().to_path_buf())
            },
            Message::FolderSelected,
        )
    }

    /// Handle typed or pasted text in the file field.
    pub fn handle_file_path_changed(&mut self, text: String) {
        self.file_path = clean_file_url(&text);
    }

    /// Handle typed or pasted text in the folder field.
    pub fn handle_folder_path_changed(&mut self, text: String) {
        self.folder_path = clean_file_url(&text);
    }

    /// Handle file selected from browser.
    pub fn handle_file_selected(&mut self, path: Option<PathBuf>) {
        if let Some(p) = path {
            self.file_path = p.to_string_lossy().to_string();
            self.config.settings_mut().paths.last_file = self.file_path.clone();
            self.save_paths_section();
        }
    }

    /// Handle folder selected from browser.
    pub fn handle_folder_selected(&mut self, path: Option<PathBuf>) {
        if let Some(p) = path {
            self.folder_path = p.to_string_lossy().to_string();
            self.config.settings_mut().paths.last_folder = self.folder_path.clone();
            self.save_paths_section();
        }
    }

    /// Handle a path dropped onto the window.
    ///
    /// Windowing systems deliver one event per dropped item.
    pub fn handle_file_dropped(&mut self, path: PathBuf) {
        let added = self.session.add_dropped(&DroppedPaths::single(path.clone()));
        if added == 0 {
            tracing::debug!("Drop contained no DAE files: {}", path.display());
        }

        let pending = self.session.pending().len();
        self.status_text = format!("{} file(s) ready to process", pending);
    }

    fn save_paths_section(&mut self) {
        if let Err(e) = self.config.update_section(ConfigSection::Paths) {
            tracing::warn!("Failed to save last used paths: {}", e);
        }
    }
}

/// Directory to open a dialog in, based on the current field value.
fn dialog_start_dir(current: &str) -> Option<PathBuf> {
    if current.is_empty() {
        return None;
    }

    let path = Path::new(current);
    if path.is_dir() {
        Some(path.to_path_buf())
    } else {
        path.parent().filter(|p| p.is_dir()).map(Path::to_path_buf)
    }
}
