//! Host-side persistence of managed file state.
//!
//! The hosting side is responsible for keeping the resource's durable record
//! between invocations. The CLI host stores one JSON file per managed local
//! file, keyed by its base name, under a state directory:
//!
//! ```text
//! <root>/
//!   └── <basename>.json
//! ```

use std::path::{Path, PathBuf};

use crate::resource::DbfsFileModel;

/// Persistence layer for [`DbfsFileModel`] records.
pub struct StateStore {
    root: PathBuf,
}

impl StateStore {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    /// The default state directory of the CLI host.
    #[must_use]
    pub fn default_root() -> PathBuf {
        PathBuf::from(".dbfsctl-state")
    }

    fn record_path(&self, local_path: &Path) -> Result<PathBuf, String> {
        let name = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("path has no file name: {}", local_path.display()))?;
        Ok(self.root.join(format!("{name}.json")))
    }

    /// Saves the state record for the model's local path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self, model: &DbfsFileModel) -> Result<(), String> {
        let path = self.record_path(&model.local_path)?;
        let json = serde_json::to_string_pretty(model)
            .map_err(|e| format!("Failed to serialize state for {}: {e}", path.display()))?;
        std::fs::create_dir_all(&self.root)
            .map_err(|e| format!("Failed to create state directory: {e}"))?;
        std::fs::write(&path, json)
            .map_err(|e| format!("Failed to write state {}: {e}", path.display()))
    }

    /// Loads the state record for a local path, or `None` when no record
    /// exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read or parsed.
    pub fn load(&self, local_path: &Path) -> Result<Option<DbfsFileModel>, String> {
        let path = self.record_path(local_path)?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read state {}: {e}", path.display()))?;
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| format!("Failed to parse state {}: {e}", path.display()))
    }

    /// Removes the state record for a local path, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be removed.
    pub fn remove(&self, local_path: &Path) -> Result<(), String> {
        let path = self.record_path(local_path)?;
        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| format!("Failed to remove state {}: {e}", path.display()))?;
        }
        Ok(())
    }
}
