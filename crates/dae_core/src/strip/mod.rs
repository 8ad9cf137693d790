//! Texture stripping for COLLADA documents.
//!
//! This module provides:
//! - `strip_textures`: in-memory removal of `<texture>` elements
//! - `strip_file`: read, strip and write one file
//! - `StripError`: per-file failures (read, encoding, write)
//!
//! # Example
//!
//! ```
//! use dae_core::strip::strip_textures;
//!
//! let out = strip_textures(r#"<model><texture file="a.png"/><mesh/></model>"#);
//! assert_eq!(out.text, "<model><mesh/></model>");
//! assert_eq!(out.removed, 1);
//! ```

mod errors;
mod stripper;

pub use errors::{StripError, StripResult};
pub use stripper::{strip_file, strip_textures, StripOutcome, Stripped, TEXTURE_PATTERN};
