use std::path::PathBuf;

use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The destination exists but is a directory or some other non-file entry.
    #[error("output path '{}' exists and is not a regular file", .path.display())]
    PathMustBeFile { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
