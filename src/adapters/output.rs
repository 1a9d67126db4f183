//! Export sinks
//!
//! Where rendered files end up. The landing page triggered a browser
//! download; here the bytes are written to a directory.

use crate::domain::{RegistryError, Result};
use std::fs;
use std::path::PathBuf;

/// Receives a rendered file
pub trait ExportSink: Send + Sync {
    /// Store `bytes` under `file_name` and return where they went
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes files into a directory, replacing any file of the same name
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory).map_err(|e| {
            RegistryError::Io(format!(
                "Cannot create output directory {}: {e}",
                self.directory.display()
            ))
        })?;

        let path = self.directory.join(file_name);
        fs::write(&path, bytes)
            .map_err(|e| RegistryError::Io(format!("Cannot write {}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Export written");
        Ok(path)
    }
}
