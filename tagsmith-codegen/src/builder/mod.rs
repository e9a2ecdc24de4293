//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Line-oriented builder for indented code
//! - [`Indent`] - Indentation configuration
//! - [`rust_string_literal`] - Escaping of arbitrary text into a literal

mod code_builder;
mod indent;
mod literal;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use literal::rust_string_literal;
