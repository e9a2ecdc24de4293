//! Core utilities and types for the tagsmith identifier generator.
//!
//! This crate provides the input record type, the name sanitizers that turn
//! arbitrary logical names into Rust symbols, and the output file writer.

mod error;
mod file;
mod naming;
mod record;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::OutputFile;
// Sanitization
pub use naming::{sanitize_const_name, sanitize_type_name};
pub use record::IdentifierRecord;
// String utilities
pub use utils::{split_words, to_pascal_case, to_screaming_snake_case};
