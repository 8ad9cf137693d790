//! Application state and message routing.

use std::path::PathBuf;

use iced::window;
use iced::{Element, Event, Subscription, Task};

use dae_core::batch::Batch;
use dae_core::config::ConfigManager;
use dae_core::session::Session;

use crate::pages;

/// Main application state.
pub struct App {
    pub config: ConfigManager,
    pub session: Session,
    /// Batch in progress, advanced one file per `ProcessNext`.
    pub batch: Option<Batch>,
    pub file_path: String,
    pub folder_path: String,
    pub status_text: String,
    /// Progress in percent.
    pub progress_value: f32,
    pub is_processing: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    FilePathChanged(String),
    FolderPathChanged(String),
    BrowseFile,
    BrowseFolder,
    FileSelected(Option<PathBuf>),
    FolderSelected(Option<PathBuf>),
    FileDropped(PathBuf),
    Process,
    ProcessNext,
    BatchCompleted,
    Clear,
}

impl App {
    /// Create the application from a loaded config.
    pub fn new(config: ConfigManager) -> (Self, Task<Message>) {
        let settings = config.settings();
        let session = Session::from_settings(settings);

        let app = Self {
            file_path: settings.paths.last_file.clone(),
            folder_path: settings.paths.last_folder.clone(),
            config,
            session,
            batch: None,
            status_text: "Ready".to_string(),
            progress_value: 0.0,
            is_processing: false,
        };

        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilePathChanged(text) => {
                self.handle_file_path_changed(text);
                Task::none()
            }
            Message::FolderPathChanged(text) => {
                self.handle_folder_path_changed(text);
                Task::none()
            }
            Message::BrowseFile => self.browse_file(),
            Message::BrowseFolder => self.browse_folder(),
            Message::FileSelected(path) => {
                self.handle_file_selected(path);
                Task::none()
            }
            Message::FolderSelected(path) => {
                self.handle_folder_selected(path);
                Task::none()
            }
            Message::FileDropped(path) => {
                self.handle_file_dropped(path);
                Task::none()
            }
            Message::Process => self.handle_process(),
            Message::ProcessNext => self.handle_process_next(),
            Message::BatchCompleted => {
                self.handle_batch_completed();
                Task::none()
            }
            Message::Clear => {
                self.handle_clear();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::main_window::view(self)
    }

    /// Listen for files dropped onto the window.
    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _id| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }
}
