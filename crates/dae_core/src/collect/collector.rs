//! Expansion of path requests into candidate files.

use std::path::Path;

use walkdir::WalkDir;

use super::file_list::{is_dae_path, DaeFile, FileList};
use super::provider::{PathProvider, PathRequest};

/// Collect every candidate file named by `provider`, in request order.
///
/// Never fails: unreadable or missing paths are skipped with a warning.
/// An empty result means there is nothing to process.
pub fn collect(provider: &impl PathProvider) -> FileList {
    let requests = provider.requests();
    let mut files = FileList::new();

    for request in &requests {
        files.append(&mut collect_request(request));
    }

    tracing::debug!(
        "Collected {} candidate file(s) from {} request(s) ({:?})",
        files.len(),
        requests.len(),
        provider.input_mode()
    );

    files
}

/// Expand a single request.
pub fn collect_request(request: &PathRequest) -> FileList {
    match request {
        PathRequest::File(path) => DaeFile::new(path.clone()).into_iter().collect(),
        PathRequest::Directory(dir) => walk_directory(dir),
        PathRequest::Dropped(path) => {
            if path.is_dir() {
                walk_directory(path)
            } else if path.is_file() {
                if is_dae_path(path) {
                    DaeFile::new(path.clone()).into_iter().collect()
                } else {
                    tracing::debug!("Skipping dropped non-DAE file: {}", path.display());
                    FileList::new()
                }
            } else {
                tracing::warn!("Dropped path not found: {}", path.display());
                FileList::new()
            }
        }
    }
}

/// Recursively collect DAE files under `dir`.
///
/// Entries are visited sorted by file name, so the order is stable across
/// runs. Directory symlinks are not followed; file symlinks are included.
/// A `dir` that is not a directory yields nothing.
pub fn walk_directory(dir: &Path) -> FileList {
    let mut files = FileList::new();
    if !dir.is_dir() {
        tracing::warn!("Not a directory, skipping: {}", dir.display());
        return files;
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };

        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }

        if let Some(file) = DaeFile::new(entry.into_path()) {
            files.push(file);
        }
    }

    files
}
