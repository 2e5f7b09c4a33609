//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::files::{FileMeta, LocalFiles};

/// Live local-file adapter backed by real disk I/O.
pub struct LiveLocalFiles;

impl LocalFiles for LiveLocalFiles {
    fn metadata(&self, path: &Path) -> Result<FileMeta, Box<dyn std::error::Error + Send + Sync>> {
        // Does not follow a trailing symlink, matching lstat semantics.
        let meta = std::fs::symlink_metadata(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("path has no file name: {}", path.display()))?
            .to_string();
        Ok(FileMeta { name, len: meta.len() })
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read(path)?)
    }
}
