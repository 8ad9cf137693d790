//! File collection from picked or dropped paths.
//!
//! This module provides:
//! - `PathProvider`: abstraction over file dialogs and drag-and-drop
//! - `PickerSelection` / `DroppedPaths`: the two concrete input sources
//! - `FileList` / `DaeFile`: the ordered candidate list
//! - `collect`: expands a provider into a `FileList`

mod collector;
mod file_list;
mod provider;

pub use collector::{collect, collect_request, walk_directory};
pub use file_list::{is_dae_path, DaeFile, FileList, DAE_EXTENSION};
pub use provider::{DroppedPaths, InputMode, PathProvider, PathRequest, PickerSelection};
