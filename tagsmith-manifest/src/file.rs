use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// A tagsmith.toml file with both its location and parsed manifest.
pub struct TagsmithToml {
    path: PathBuf,
    manifest: Manifest,
}

impl TagsmithToml {
    /// Open and parse a tagsmith.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The configured output path, resolved against the manifest's directory.
    pub fn output_path(&self) -> PathBuf {
        let output = &self.manifest.output.path;
        match self.path.parent() {
            Some(dir) if output.is_relative() => dir.join(output),
            _ => output.clone(),
        }
    }
}
