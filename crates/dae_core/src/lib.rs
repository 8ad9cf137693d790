//! DAE Core - Backend logic for DAE Fixer
//!
//! This crate contains all business logic with zero UI dependencies.
//! It can be used by the GUI application or a CLI tool.
//!
//! The flow for one run is:
//! 1. A [`collect::PathProvider`] describes what the user picked or dropped.
//! 2. [`collect::collect`] turns it into a [`collect::FileList`].
//! 3. A [`batch::Batch`] strips every file in order, reporting progress.

pub mod batch;
pub mod collect;
pub mod config;
pub mod logging;
pub mod session;
pub mod strip;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
