//! TOML manifest parsing and validation for tagsmith.toml files.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use file::TagsmithToml;
pub use manifest::{IdentifierEntry, IndentSetting, Manifest, OutputConfig};
