//! Orchestration context for the front-end.
//!
//! A `Session` owns the state that outlives a single event: the files
//! collected from drops but not yet processed, and the status log. The
//! caller owns the session and passes it what the user picked; nothing is
//! global.

use std::mem;
use std::path::PathBuf;

use crate::batch::{Batch, BatchError, BatchSummary, FileReport};
use crate::collect::{collect, DroppedPaths, FileList, InputMode, PickerSelection};
use crate::config::{OutputSettings, Settings};
use crate::logging::{StatusLine, StatusLog};

pub struct Session {
    /// Files collected from drops, waiting for the next run.
    dropped: FileList,
    log: StatusLog,
    /// Where run log files go; `None` disables them.
    run_logs_dir: Option<PathBuf>,
}

impl Session {
    pub fn new(log: StatusLog) -> Self {
        Self {
            dropped: FileList::new(),
            log,
            run_logs_dir: None,
        }
    }

    /// Session configured from loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut session = Self::new(StatusLog::new(settings.logging.log_config()));
        if settings.logging.write_run_log {
            session.run_logs_dir = Some(PathBuf::from(&settings.paths.logs_folder));
        }
        session
    }

    /// Write each run's lines to a file under `dir`.
    pub fn with_run_logs(mut self, dir: impl Into<PathBuf>) -> Self {
        self.run_logs_dir = Some(dir.into());
        self
    }

    pub fn log(&self) -> &StatusLog {
        &self.log
    }

    /// Files dropped since the last run or reset.
    pub fn pending(&self) -> &FileList {
        &self.dropped
    }

    /// Collect a drop payload into the pending list.
    ///
    /// Logs `Added: <path>` per candidate and returns how many were added.
    pub fn add_dropped(&mut self, dropped: &DroppedPaths) -> usize {
        let mut found = collect(dropped);
        for file in &found {
            self.log.push(&StatusLine::Added(file.path().to_path_buf()));
        }

        let added = found.len();
        self.dropped.append(&mut found);
        added
    }

    /// Forget pending dropped files.
    pub fn reset(&mut self) {
        self.dropped.clear();
        self.log.push(&StatusLine::Cleared);
    }

    /// Start a run.
    ///
    /// Pending dropped files take precedence; otherwise the picker
    /// selection is collected and the log is cleared first. Returns `None`
    /// (after logging a warning) when there is nothing to process.
    pub fn start(&mut self, selection: &PickerSelection, output: &OutputSettings) -> Option<Batch> {
        let (files, mode) = if self.dropped.is_empty() {
            self.log.clear();
            (collect(selection), InputMode::Picker)
        } else {
            (mem::take(&mut self.dropped), InputMode::Dropped)
        };

        match Batch::plan(files, mode, output) {
            Ok(batch) => {
                self.open_run_log();
                tracing::info!("Starting batch of {} file(s) ({:?})", batch.total(), mode);
                Some(batch)
            }
            Err(BatchError::NoFiles) => {
                self.log.push(&StatusLine::NoValidFiles);
                None
            }
        }
    }

    /// Log the result of one file.
    pub fn record(&self, report: &FileReport) {
        self.log.push(&report.status_line());
    }

    /// Log completion and close the run file.
    pub fn finish(&self, summary: &BatchSummary) {
        self.log.push(&summary.status_line());
        self.log.close_run_file();
    }

    /// Run a whole batch synchronously.
    ///
    /// `on_progress` receives the fraction done after each file. Returns
    /// `None` if there was nothing to process.
    pub fn run(
        &mut self,
        selection: &PickerSelection,
        output: &OutputSettings,
        mut on_progress: impl FnMut(f32),
    ) -> Option<BatchSummary> {
        let batch = self.start(selection, output)?;
        let summary = batch.run(|report| {
            self.record(report);
            on_progress(report.progress());
        });
        self.finish(&summary);
        Some(summary)
    }

    fn open_run_log(&self) {
        if let Some(dir) = &self.run_logs_dir {
            if let Err(e) = self.log.open_run_file(dir) {
                tracing::warn!("Failed to open run log in {}: {}", dir.display(), e);
            }
        }
    }
}
