//! Local filesystem port for the files being mirrored to DBFS.

use std::path::Path;

/// Metadata of a local file, as much of it as the lifecycle needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    /// Base name of the file (the remote name is derived from this).
    pub name: String,
    /// Size in bytes.
    pub len: u64,
}

/// Provides read access to local files.
///
/// Abstracting the filesystem lets lifecycle tests run without touching
/// the real disk.
pub trait LocalFiles: Send + Sync {
    /// Stats a file without following a trailing symlink.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or has no representable
    /// base name.
    fn metadata(&self, path: &Path) -> Result<FileMeta, Box<dyn std::error::Error + Send + Sync>>;

    /// Reads the entire contents of a file as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}
