//! Batch processing handlers.

use iced::Task;

use dae_core::collect::PickerSelection;

use crate::app::{App, Message};

impl App {
    /// Start processing the dropped files or the picker selection.
    pub fn handle_process(&mut self) -> Task<Message> {
        if self.is_processing {
            return Task::none();
        }

        let selection = PickerSelection::from_fields(&self.file_path, &self.folder_path);
        match self.session.start(&selection, &self.config.settings().output) {
            Some(batch) => {
                self.status_text = format!("Processing {} file(s)...", batch.total());
                self.progress_value = 0.0;
                self.is_processing = true;
                self.batch = Some(batch);
                Task::done(Message::ProcessNext)
            }
            None => {
                self.status_text = "Nothing to process".to_string();
                Task::none()
            }
        }
    }

    /// Strip one file, then hand control back to the event loop.
    pub fn handle_process_next(&mut self) -> Task<Message> {
        let Some(batch) = self.batch.as_mut() else {
            return Task::none();
        };

        match batch.process_next() {
            Some(report) => {
                self.session.record(&report);
                self.progress_value = report.progress() * 100.0;
                self.status_text = format!(
                    "Processing {} of {}: {}",
                    report.position,
                    report.total,
                    report.input.display()
                );
                Task::done(Message::ProcessNext)
            }
            None => Task::done(Message::BatchCompleted),
        }
    }

    /// Log the totals and return to idle.
    pub fn handle_batch_completed(&mut self) {
        self.is_processing = false;
        let Some(batch) = self.batch.take() else {
            return;
        };

        let summary = batch.summary();
        self.session.finish(&summary);
        self.progress_value = 100.0;
        self.status_text = if summary.failed == 0 {
            summary.status_line().to_string()
        } else {
            format!("{} ({} failed)", summary.status_line(), summary.failed)
        };
    }

    /// Handle the Clear button.
    pub fn handle_clear(&mut self) {
        if self.is_processing {
            return;
        }

        self.session.reset();
        self.file_path.clear();
        self.folder_path.clear();
        self.progress_value = 0.0;
        self.status_text = "Ready".to_string();
    }
}
