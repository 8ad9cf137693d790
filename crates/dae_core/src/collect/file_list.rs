//! Candidate files and the ordered list they are collected into.

use std::fmt;
use std::path::{Path, PathBuf};

/// Extension recognized as a COLLADA document (compared case-insensitively).
pub const DAE_EXTENSION: &str = ".dae";

/// Check whether a path's file name ends in `.dae`, in any letter case.
pub fn is_dae_path(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_ascii_lowercase()
                .ends_with(DAE_EXTENSION)
        })
        .unwrap_or(false)
}

/// A path known to end in `.dae`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DaeFile(PathBuf);

impl DaeFile {
    /// Wrap a path if its name has the DAE extension.
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if is_dae_path(&path) {
            Some(Self(path))
        } else {
            None
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// File name without the `.dae` extension.
    pub fn base_name(&self) -> String {
        let name = self
            .0
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        name[..name.len() - DAE_EXTENSION.len()].to_string()
    }
}

impl AsRef<Path> for DaeFile {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DaeFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Ordered list of candidate files.
///
/// Order is collection order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    files: Vec<DaeFile>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: DaeFile) {
        self.files.push(file);
    }

    pub fn append(&mut self, other: &mut FileList) {
        self.files.append(&mut other.files);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn first(&self) -> Option<&DaeFile> {
        self.files.first()
    }

    pub fn get(&self, index: usize) -> Option<&DaeFile> {
        self.files.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DaeFile> {
        self.files.iter()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Paths in list order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path().to_path_buf()).collect()
    }
}

impl FromIterator<DaeFile> for FileList {
    fn from_iter<I: IntoIterator<Item = DaeFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FileList {
    type Item = DaeFile;
    type IntoIter = std::vec::IntoIter<DaeFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a DaeFile;
    type IntoIter = std::slice::Iter<'a, DaeFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
