//! Message handlers, split by concern.
//!
//! Each submodule adds methods to `App`.

pub mod browse;
pub mod helpers;
pub mod processing;
