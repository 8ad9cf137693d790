//! Sequential batch over a file list.
//!
//! A `Batch` strips one file per `process_next` call so a GUI can return
//! to its event loop between files. `run` drives the whole list for
//! callers that do not need to yield.

use std::path::PathBuf;

use crate::collect::{FileList, InputMode};
use crate::config::OutputSettings;
use crate::logging::StatusLine;
use crate::strip::{strip_file, StripOutcome, StripResult};

use super::errors::{BatchError, BatchResult};
use super::output::OutputLayout;

/// Result of one file in a batch.
#[derive(Debug)]
pub struct FileReport {
    /// 1-based position in the batch.
    pub position: usize,
    pub total: usize,
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: StripResult<StripOutcome>,
}

impl FileReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Fraction of the batch done after this file, in [0, 1].
    pub fn progress(&self) -> f32 {
        self.position as f32 / self.total as f32
    }

    /// Log line for this file.
    pub fn status_line(&self) -> StatusLine {
        match &self.result {
            Ok(_) => StatusLine::Processed(self.input.clone()),
            Err(e) => StatusLine::Failed {
                path: self.input.clone(),
                message: e.to_string(),
            },
        }
    }
}

/// Counts after a batch (or so far).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files handled, successful or not.
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Texture elements removed across all successful files.
    pub textures_removed: usize,
}

impl BatchSummary {
    /// Completion line; counts every handled file.
    pub fn status_line(&self) -> StatusLine {
        StatusLine::Completed(self.processed)
    }
}

/// A run over a non-empty file list.
#[derive(Debug)]
pub struct Batch {
    files: FileList,
    layout: OutputLayout,
    next: usize,
    summary: BatchSummary,
}

impl Batch {
    /// Create a batch with an explicit layout.
    ///
    /// Fails with `BatchError::NoFiles` if `files` is empty.
    pub fn new(files: FileList, layout: OutputLayout) -> BatchResult<Self> {
        if files.is_empty() {
            return Err(BatchError::NoFiles);
        }

        Ok(Self {
            files,
            layout,
            next: 0,
            summary: BatchSummary::default(),
        })
    }

    /// Create a batch, choosing the output layout from mode and settings.
    pub fn plan(files: FileList, mode: InputMode, settings: &OutputSettings) -> BatchResult<Self> {
        let layout = OutputLayout::plan(&files, mode, settings);
        Self::new(files, layout)
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.files.len()
    }

    /// Fraction of files handled so far, in [0, 1].
    pub fn progress(&self) -> f32 {
        self.next as f32 / self.files.len() as f32
    }

    pub fn summary(&self) -> BatchSummary {
        self.summary
    }

    /// Strip the next file. Returns `None` once every file was handled.
    pub fn process_next(&mut self) -> Option<FileReport> {
        let file = self.files.get(self.next)?;
        let output = self.layout.output_for(file);
        let result = strip_file(file.path(), &output);

        self.next += 1;
        self.summary.processed += 1;
        match &result {
            Ok(outcome) => {
                self.summary.succeeded += 1;
                self.summary.textures_removed += outcome.removed;
            }
            Err(e) => {
                self.summary.failed += 1;
                tracing::debug!("File {} of {} failed: {}", self.next, self.total(), e);
            }
        }

        Some(FileReport {
            position: self.next,
            total: self.total(),
            input: file.path().to_path_buf(),
            output,
            result,
        })
    }

    /// Process every remaining file, calling `on_file` after each.
    pub fn run(mut self, mut on_file: impl FnMut(&FileReport)) -> BatchSummary {
        while let Some(report) = self.process_next() {
            on_file(&report);
        }

        let summary = self.summary;
        tracing::info!(
            "Batch finished: {} processed, {} failed, {} texture element(s) removed",
            summary.processed,
            summary.failed,
            summary.textures_removed
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::{collect, DaeFile, DroppedPaths};
    use crate::logging::init_test_tracing;
    use std::fs;
    use tempfile::tempdir;

    const MODEL: &str = r#"<model><texture file="a.png"/><mesh/></model>"#;

    #[test]
    fn empty_list_does_not_start() {
        let err = Batch::plan(FileList::new(), InputMode::Picker, &OutputSettings::default())
            .unwrap_err();
        assert_eq!(err, BatchError::NoFiles);
    }

    #[test]
    fn processes_in_order_with_progress() {
        init_test_tracing();
        let dir = tempdir().unwrap();
        let files: FileList = ["a.dae", "b.dae", "c.dae"]
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                fs::write(&path, MODEL).unwrap();
                DaeFile::new(path).unwrap()
            })
            .collect();

        let batch = Batch::plan(files, InputMode::Picker, &OutputSettings::default()).unwrap();
        let mut seen = Vec::new();
        let summary = batch.run(|report| seen.push((report.position, report.progress())));

        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].0, 1);
        assert!((seen[0].1 - 1.0 / 3.0).abs() < f32::EPSILON);
        assert_eq!(seen[2].1, 1.0);
        assert_eq!(summary.processed, 3);
        assert_eq!(summary.succeeded, 3);
        assert_eq!(summary.textures_removed, 3);
        assert_eq!(
            fs::read_to_string(dir.path().join("b_fixed.dae")).unwrap(),
            "<model><mesh/></model>"
        );
    }

    #[test]
    fn failure_does_not_stop_batch() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.dae");
        fs::write(&good, MODEL).unwrap();
        let files: FileList = [dir.path().join("missing.dae"), good]
            .into_iter()
            .filter_map(DaeFile::new)
            .collect();

        let mut batch = Batch::plan(files, InputMode::Picker, &OutputSettings::default()).unwrap();

        let first = batch.process_next().unwrap();
        assert!(!first.is_success());
        assert!(matches!(first.status_line(), StatusLine::Failed { .. }));
        assert!(first
            .status_line()
            .to_string()
            .starts_with("Error processing "));

        let second = batch.process_next().unwrap();
        assert!(second.is_success());
        assert!(batch.process_next().is_none());
        assert!(batch.is_finished());

        let summary = batch.summary();
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.status_line(), StatusLine::Completed(2));
        assert!(dir.path().join("good_fixed.dae").exists());
    }

    #[test]
    fn three_dropped_files_share_one_output_directory() {
        let dir = tempdir().unwrap();
        let mut dropped = Vec::new();
        for name in ["one.dae", "two.dae", "three.dae"] {
            let path = dir.path().join(name);
            fs::write(&path, MODEL).unwrap();
            dropped.push(path);
        }

        let files = collect(&DroppedPaths(dropped));
        let batch = Batch::plan(files, InputMode::Dropped, &OutputSettings::default()).unwrap();
        let shared = batch.layout().shared_dir().cloned().unwrap();
        let summary = batch.run(|_| {});

        assert_eq!(summary.succeeded, 3);
        assert_eq!(shared, dir.path().join("fixed_output"));
        let mut outputs: Vec<String> = fs::read_dir(&shared)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        outputs.sort();
        assert_eq!(
            outputs,
            vec!["one_fixed.dae", "three_fixed.dae", "two_fixed.dae"]
        );
        // Only the shared directory was added next to the inputs.
        let dirs = fs::read_dir(dir.path())
            .unwrap()
            .filter(|e| e.as_ref().unwrap().path().is_dir())
            .count();
        assert_eq!(dirs, 1);
    }

    #[test]
    fn empty_suffix_leaves_input_untouched() {
        let dir = tempdir().unwrap();
        let model = dir.path().join("hull.dae");
        fs::write(&model, MODEL).unwrap();
        let settings = OutputSettings {
            suffix: String::new(),
            ..OutputSettings::default()
        };

        let files: FileList = DaeFile::new(model.clone()).into_iter().collect();
        let mut batch = Batch::plan(files, InputMode::Picker, &settings).unwrap();
        let report = batch.process_next().unwrap();

        assert!(!report.is_success());
        assert_eq!(batch.summary().failed, 1);
        assert_eq!(fs::read_to_string(&model).unwrap(), MODEL);
    }

    #[test]
    fn progress_starts_at_zero() {
        let files: FileList = [DaeFile::new("x.dae").unwrap()].into_iter().collect();
        let batch = Batch::plan(files, InputMode::Picker, &OutputSettings::default()).unwrap();
        assert_eq!(batch.progress(), 0.0);
        assert!(!batch.is_finished());
    }
}
