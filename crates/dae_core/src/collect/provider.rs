//! Input sources, independent of any windowing system.
//!
//! File dialogs and drag-and-drop both end up as a [`PathProvider`]. The
//! collector only sees [`PathRequest`]s, so it can be driven from a GUI,
//! a CLI or a test.

use std::path::PathBuf;

/// How the paths reached the application.
///
/// Decides where outputs go: dropped multi-file runs share one output
/// directory, picker runs write next to each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// File and/or folder chosen in the picker fields.
    #[default]
    Picker,
    /// Paths dropped onto the window.
    Dropped,
}

/// One path to expand into candidate files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathRequest {
    /// An explicitly chosen file. Included if the name matches, without
    /// checking that it exists.
    File(PathBuf),
    /// A directory to walk recursively.
    Directory(PathBuf),
    /// A dropped path of unknown kind. Directories are walked, matching
    /// files are included, anything else is skipped.
    Dropped(PathBuf),
}

/// Source of paths for one collection pass.
pub trait PathProvider {
    /// How the paths were supplied.
    fn input_mode(&self) -> InputMode;

    /// Paths to expand, in order.
    fn requests(&self) -> Vec<PathRequest>;
}

/// Selection from the file and folder picker fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerSelection {
    pub file: Option<PathBuf>,
    pub folder: Option<PathBuf>,
}

impl PickerSelection {
    /// Build a selection from raw field text. Blank fields are ignored.
    pub fn from_fields(file: &str, folder: &str) -> Self {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| PathBuf::from(s))
        };
        Self {
            file: non_empty(file),
            folder: non_empty(folder),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.folder.is_none()
    }
}

impl PathProvider for PickerSelection {
    fn input_mode(&self) -> InputMode {
        InputMode::Picker
    }

    fn requests(&self) -> Vec<PathRequest> {
        let mut requests = Vec::with_capacity(2);
        if let Some(file) = &self.file {
            requests.push(PathRequest::File(file.clone()));
        }
        if let Some(folder) = &self.folder {
            requests.push(PathRequest::Directory(folder.clone()));
        }
        requests
    }
}

/// Paths delivered by a drag-and-drop payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DroppedPaths(pub Vec<PathBuf>);

impl DroppedPaths {
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self(vec![path.into()])
    }
}

impl PathProvider for DroppedPaths {
    fn input_mode(&self) -> InputMode {
        InputMode::Dropped
    }

    fn requests(&self) -> Vec<PathRequest> {
        self.0.iter().cloned().map(PathRequest::Dropped).collect()
    }
}
