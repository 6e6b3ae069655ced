use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{path:?} has no usable parent directory: {reason}")]
    Dir { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A small text file that is always replaced whole, never edited in place.
///
/// Readers see either the previous content or the new content, never a torn
/// write: `replace` stages into a sibling temp file and renames it over the
/// target.
#[derive(Debug, Clone)]
pub struct StoredFile {
    path: PathBuf,
}

impl StoredFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been stored yet.
    pub fn read(&self) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn replace(&self, content: &str) -> Result<(), PersistError> {
        let dir = self.parent_dir()?;

        let mut staged = NamedTempFile::new_in(&dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file_mut().sync_all()?;
        staged
            .persist(&self.path)
            .map_err(|err| PersistError::Io(err.error))?;
        Ok(())
    }

    fn parent_dir(&self) -> Result<PathBuf, PersistError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let dir_error = |reason: String| PersistError::Dir {
            path: self.path.clone(),
            reason,
        };

        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => Ok(dir),
            Ok(_) => Err(dir_error("parent is not a directory".to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&dir).map_err(|e| dir_error(e.to_string()))?;
                Ok(dir)
            }
            Err(err) => Err(dir_error(err.to_string())),
        }
    }
}
