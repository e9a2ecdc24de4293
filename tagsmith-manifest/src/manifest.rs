//! Manifest types and parsing for tagsmith.toml files.

use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;
use tagsmith_core::IdentifierRecord;

use crate::{
    Error, Result,
    error::SourceContext,
    validate::{find_value_span, validate_module_name},
};

/// Default output file, relative to the manifest.
pub const DEFAULT_OUTPUT_PATH: &str = "src/generated/identifiers.rs";

/// Default name of the generated module.
pub const DEFAULT_MODULE: &str = "accessibility_identifiers";

/// Root manifest for tagsmith.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where and how the generated module is written
    #[serde(default)]
    pub output: OutputConfig,

    /// Identifier records, one `[[identifier]]` table each
    #[serde(default, rename = "identifier")]
    pub identifiers: Vec<IdentifierEntry>,
}

/// The `[output]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_module")]
    pub module: String,
    #[serde(default)]
    pub indent: IndentSetting,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            module: default_module(),
            indent: IndentSetting::default(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_module() -> String {
    DEFAULT_MODULE.to_string()
}

/// Indentation of the generated file: `2`, `4`, `8` or `"tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIndent")]
pub enum IndentSetting {
    Spaces(u8),
    Tab,
}

impl Default for IndentSetting {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(u8),
    Name(String),
}

impl TryFrom<RawIndent> for IndentSetting {
    type Error = String;

    fn try_from(raw: RawIndent) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(width @ (2 | 4 | 8)) => Ok(Self::Spaces(width)),
            RawIndent::Width(width) => Err(format!(
                "unsupported indent width {width}, use 2, 4, 8 or \"tab\""
            )),
            RawIndent::Name(name) if name == "tab" => Ok(Self::Tab),
            RawIndent::Name(name) => Err(format!(
                "unknown indent '{name}', use 2, 4, 8 or \"tab\""
            )),
        }
    }
}

/// One `[[identifier]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentifierEntry {
    pub parent: String,
    pub identifier: String,
    /// Falls back to `identifier` when omitted.
    pub raw_value: Option<String>,
}

impl IdentifierEntry {
    pub fn to_record(&self) -> IdentifierRecord {
        IdentifierRecord::new(
            self.parent.as_str(),
            self.identifier.as_str(),
            self.raw_value.as_deref().unwrap_or(&self.identifier),
        )
    }
}

impl Manifest {
    /// All identifier entries as generator input.
    pub fn records(&self) -> Vec<IdentifierRecord> {
        self.identifiers.iter().map(IdentifierEntry::to_record).collect()
    }

    /// Parse a tagsmith.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        manifest.validate(&ctx)?;
        Ok(manifest)
    }

    fn validate(&self, ctx: &SourceContext<'_>) -> Result<()> {
        let module = &self.output.module;
        if let Some(reason) = validate_module_name(module) {
            let span = find_value_span(ctx.src(), module);
            return Err(ctx.invalid_module_error(module, reason, span));
        }
        Ok(())
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "tagsmith.toml")
    }
}
