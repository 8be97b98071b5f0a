//! Hand-off of finished letters to the host.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Receives a rendered letter and its suggested file name.
pub trait Exporter {
    fn export(&mut self, content: &str, file_name: &str) -> Result<()>;
}

/// Saves letters as files inside a target directory.
#[derive(Clone, Debug)]
pub struct DirectoryExporter {
    directory: PathBuf,
}

impl DirectoryExporter {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Exporter for DirectoryExporter {
    fn export(&mut self, content: &str, file_name: &str) -> Result<()> {
        fs::create_dir_all(&self.directory)
            .with_context(|| format!("Failed to create directory '{}'", self.directory.display()))?;
        let path = self.directory.join(file_name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write letter '{}'", path.display()))?;
        info!(path = %path.display(), bytes = content.len(), "exported letter");
        Ok(())
    }
}
