use std::path::Path;

use tagsmith_core::{IdentifierRecord, OutputFile, Result};

use crate::{
    model::GroupedModel,
    render::{RenderOptions, render},
};

/// Generates a module of typed identifier constants.
///
/// Records are grouped once at construction; every call to [`render`] or
/// [`generate`] works from that same immutable model.
///
/// [`render`]: Generator::render
/// [`generate`]: Generator::generate
///
/// # Example
///
/// ```
/// use tagsmith_codegen::Generator;
/// use tagsmith_core::IdentifierRecord;
///
/// let generator = Generator::new([IdentifierRecord::new("Login", "submit", "login.submit")]);
/// let code = generator.render();
///
/// assert!(code.contains("pub const SUBMIT: Self = Self { raw_value: \"login.submit\" };"));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    model: GroupedModel,
    options: RenderOptions,
}

impl Generator {
    /// Create a generator with default render options.
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = IdentifierRecord>,
    {
        Self::with_options(records, RenderOptions::default())
    }

    pub fn with_options<I>(records: I, options: RenderOptions) -> Self
    where
        I: IntoIterator<Item = IdentifierRecord>,
    {
        Self {
            model: GroupedModel::from_records(records),
            options,
        }
    }

    pub fn model(&self) -> &GroupedModel {
        &self.model
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the generated source without touching the filesystem.
    pub fn render(&self) -> String {
        render(&self.model, &self.options)
    }

    /// Render and write the generated source to `destination`.
    ///
    /// Fails with [`tagsmith_core::Error::PathMustBeFile`] before writing
    /// anything when `destination` exists and is not a regular file. I/O
    /// errors are returned unchanged.
    pub fn generate(&self, destination: &Path) -> Result<()> {
        let _span = tracing::debug_span!("generate", path = %destination.display()).entered();
        OutputFile::new(destination, self.render()).write()
    }
}
