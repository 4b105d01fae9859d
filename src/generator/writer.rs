//! Output writer - persists generated documents under the project root

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes files relative to a root directory, creating parents as needed
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Write `contents` to `relative`, replacing any existing file
    pub fn write(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let output_path = self.root.join(relative.trim_start_matches('/'));
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, contents)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Wrote {:?}", output_path);
        Ok(output_path)
    }

    /// Whether a file already exists at `relative`
    pub fn exists(&self, relative: &str) -> bool {
        self.root.join(relative.trim_start_matches('/')).is_file()
    }
}
