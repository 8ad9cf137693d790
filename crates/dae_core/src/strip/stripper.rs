//! Texture element removal.
//!
//! Matching is done with a plain regular expression, not an XML parser.
//! The pattern has two alternatives, tried leftmost-first:
//!
//! 1. `<texture[^>]*>.*?</texture>`: opening tag, shortest body (may span
//!    lines), closing tag.
//! 2. `<texture[^>]*\s*/>`: self-closing tag.
//!
//! Because the first alternative also accepts a self-closing tag as its
//! opening tag, `<texture a="1"/>` followed anywhere later by `</texture>`
//! is removed up to and including that closing tag.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::errors::{StripError, StripResult};

/// Pattern matching one texture element in either form.
pub const TEXTURE_PATTERN: &str = r"(?s)<texture[^>]*>.*?</texture>|<texture[^>]*\s*/>";

static TEXTURE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(TEXTURE_PATTERN).expect("texture pattern is a valid regex"));

/// Text after stripping, with the number of removed elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped<'a> {
    pub text: Cow<'a, str>,
    pub removed: usize,
}

/// Remove every texture element from `content`.
///
/// Returns the input borrowed when nothing matched.
pub fn strip_textures(content: &str) -> Stripped<'_> {
    let mut removed = 0;
    let text = TEXTURE_RE.replace_all(content, |_: &Captures<'_>| {
        removed += 1;
        ""
    });

    Stripped { text, removed }
}

/// Result of stripping one file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of texture elements removed.
    pub removed: usize,
}

/// Read `input`, strip texture elements and write the result to `output`.
///
/// The output is overwritten if it exists and its parent directory is
/// created if missing. An output path equal to `input` is refused. Bytes outside the removed spans are written back
/// unchanged, line endings included.
pub fn strip_file(input: &Path, output: &Path) -> StripResult<StripOutcome> {
    if output == input {
        return Err(StripError::same_file(input));
    }

    let bytes = fs::read(input).map_err(|e| StripError::read(input, e))?;
    let content = String::from_utf8(bytes).map_err(|e| StripError::encoding(input, e))?;

    let stripped = strip_textures(&content);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| StripError::create_dir(parent, e))?;
        }
    }

    fs::write(output, stripped.text.as_bytes()).map_err(|e| StripError::write(output, e))?;

    tracing::debug!(
        "Stripped {} texture element(s): {} -> {}",
        stripped.removed,
        input.display(),
        output.display()
    );

    Ok(StripOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        removed: stripped.removed,
    })
}
