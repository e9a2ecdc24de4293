use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    /// Create a new output file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the content, replacing whatever the file held before.
    ///
    /// Fails with [`Error::PathMustBeFile`] without touching the filesystem
    /// when the path exists and is not a regular file.
    pub fn write(&self) -> Result<()> {
        ensure_writable_file(&self.path)?;
        write_file(&self.path, &self.content)
    }
}

fn ensure_writable_file(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => Err(Error::PathMustBeFile {
            path: path.to_path_buf(),
        }),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ids.rs");

        OutputFile::new(&path, "hello").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("ids.rs");

        OutputFile::new(&path, "nested").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ids.rs");
        fs::write(&path, "a much longer original body").unwrap();

        OutputFile::new(&path, "short").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_rejects_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("out");
        fs::create_dir(&dir).unwrap();

        let err = OutputFile::new(&dir, "content").write().unwrap_err();

        assert!(matches!(err, Error::PathMustBeFile { ref path } if path == &dir));
        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_io_error_keeps_its_kind() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "i am a file").unwrap();

        // The parent of the destination is a regular file.
        let err = OutputFile::new(blocker.join("ids.rs"), "content")
            .write()
            .unwrap_err();

        match err {
            Error::Io(e) => assert_ne!(e.kind(), ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "i am a file");
    }
}
