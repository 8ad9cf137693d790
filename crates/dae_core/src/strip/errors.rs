//! Error types for stripping a single file.
//!
//! Every variant carries the path it failed on, so the batch log can
//! report the failure without extra context.

use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failure while stripping one file.
#[derive(Error, Debug)]
pub enum StripError {
    /// The input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file is not valid UTF-8 text.
    #[error("{} is not valid UTF-8 text: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output path is the input path.
    #[error("Output would overwrite input {}", path.display())]
    SameFile { path: PathBuf },
}

impl StripError {
    /// Create a read error.
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an encoding error.
    pub fn encoding(path: impl AsRef<Path>, source: FromUtf8Error) -> Self {
        Self::Encoding {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a directory creation error.
    pub fn create_dir(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an error for an output that would replace its input.
    pub fn same_file(path: impl AsRef<Path>) -> Self {
        Self::SameFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path the operation failed on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Encoding { path, .. }
            | Self::CreateDir { path, .. }
            | Self::Write { path, .. }
            | Self::SameFile { path } => path,
        }
    }
}

/// Result type for strip operations.
pub type StripResult<T> = Result<T, StripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_displays_path() {
        let err = StripError::read(
            "/models/ship.dae",
            io::Error::new(io::ErrorKind::NotFound, "No such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/models/ship.dae"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn path_returns_failing_path() {
        let err = StripError::write(
            "/out/ship_fixed.dae",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.path(), Path::new("/out/ship_fixed.dae"));
    }
}
