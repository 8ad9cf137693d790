//! Output path policy.
//!
//! Outputs are named `<base><suffix>.dae`. They go next to each input,
//! except for multi-file dropped runs, which write into one shared
//! directory created next to the first input file.

use std::path::PathBuf;

use crate::collect::{DaeFile, FileList, InputMode};
use crate::config::OutputSettings;

/// Where the outputs of one run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLayout {
    /// `<input_dir>/<base><suffix>.dae`
    Sibling { suffix: String },
    /// `<dir>/<base><suffix>.dae`
    SharedDir { dir: PathBuf, suffix: String },
}

impl OutputLayout {
    /// Pick the layout for a run over `files`.
    pub fn plan(files: &FileList, mode: InputMode, settings: &OutputSettings) -> Self {
        let suffix = settings.suffix.clone();

        let shared = mode == InputMode::Dropped && files.len() > 1 && settings.shared_dir_for_drops;
        match files.first() {
            Some(first) if shared => {
                let parent = first
                    .path()
                    .parent()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_default();
                OutputLayout::SharedDir {
                    dir: parent.join(&settings.shared_dir_name),
                    suffix,
                }
            }
            _ => OutputLayout::Sibling { suffix },
        }
    }

    /// Output path for one input.
    pub fn output_for(&self, file: &DaeFile) -> PathBuf {
        match self {
            OutputLayout::Sibling { suffix } => file
                .path()
                .with_file_name(format!("{}{}.dae", file.base_name(), suffix)),
            OutputLayout::SharedDir { dir, suffix } => {
                dir.join(format!("{}{}.dae", file.base_name(), suffix))
            }
        }
    }

    /// The shared directory, if this layout uses one.
    pub fn shared_dir(&self) -> Option<&PathBuf> {
        match self {
            OutputLayout::SharedDir { dir, .. } => Some(dir),
            OutputLayout::Sibling { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn list(paths: &[&str]) -> FileList {
        paths.iter().filter_map(|p| DaeFile::new(*p)).collect()
    }

    #[test]
    fn picker_runs_write_next_to_input() {
        let files = list(&["/m/a.dae", "/m/sub/b.DAE"]);
        let layout = OutputLayout::plan(&files, InputMode::Picker, &OutputSettings::default());

        assert_eq!(layout.shared_dir(), None);
        assert_eq!(
            layout.output_for(files.get(0).unwrap()),
            Path::new("/m/a_fixed.dae")
        );
        assert_eq!(
            layout.output_for(files.get(1).unwrap()),
            Path::new("/m/sub/b_fixed.dae")
        );
    }

    #[test]
    fn multi_file_drops_share_a_directory() {
        let files = list(&["/m/a.dae", "/other/b.dae"]);
        let layout = OutputLayout::plan(&files, InputMode::Dropped, &OutputSettings::default());

        assert_eq!(layout.shared_dir(), Some(&PathBuf::from("/m/fixed_output")));
        assert_eq!(
            layout.output_for(files.get(1).unwrap()),
            Path::new("/m/fixed_output/b_fixed.dae")
        );
    }

    #[test]
    fn single_drop_writes_next_to_input() {
        let files = list(&["/m/a.dae"]);
        let layout = OutputLayout::plan(&files, InputMode::Dropped, &OutputSettings::default());
        assert_eq!(layout.shared_dir(), None);
    }

    #[test]
    fn shared_directory_can_be_disabled() {
        let files = list(&["/m/a.dae", "/m/b.dae"]);
        let settings = OutputSettings {
            shared_dir_for_drops: false,
            ..OutputSettings::default()
        };
        let layout = OutputLayout::plan(&files, InputMode::Dropped, &settings);
        assert_eq!(layout.shared_dir(), None);
    }

    #[test]
    fn custom_suffix_is_applied() {
        let files = list(&["/m/a.dae"]);
        let settings = OutputSettings {
            suffix: "_output".to_string(),
            ..OutputSettings::default()
        };
        let layout = OutputLayout::plan(&files, InputMode::Picker, &settings);
        assert_eq!(
            layout.output_for(files.get(0).unwrap()),
            Path::new("/m/a_output.dae")
        );
    }
}
