//! Code generation for typed accessibility identifier constants.
//!
//! # Module Organization
//!
//! - [`builder`] - Line-oriented code building and literal escaping
//! - [`model`] - Grouping of records by namespace
//! - [`render`] - Deterministic rendering of the grouped model
//!
//! [`Generator`] ties them together and writes the result to disk.

pub mod builder;
mod generator;
pub mod model;
pub mod render;

pub use generator::Generator;
pub use model::{DuplicateName, Group, GroupedModel, Member};
pub use render::{RenderOptions, render};
