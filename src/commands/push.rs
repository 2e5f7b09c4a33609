//! `dbfsctl push` command.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{LiveDbfsApi, LiveLocalFiles};
use crate::commands::HostSettings;
use crate::diagnostics::Diagnostics;
use crate::lifecycle::ManagedResource as _;
use crate::provider::ClientSecretCredential;
use crate::resource::{DbfsFileModel, DbfsFileResource};
use crate::store::StateStore;

/// Uploads a local file to the managed prefix and persists its state.
///
/// Runs Create when no state record exists for the file yet, Update
/// otherwise.
///
/// # Errors
///
/// Returns an error string when state persistence fails or the lifecycle
/// reports blocking diagnostics.
pub async fn run(
    settings: &HostSettings,
    credential: Arc<ClientSecretCredential>,
    local_path: &Path,
    content_md5: &str,
) -> Result<(), String> {
    let mut resource = DbfsFileResource::new(Arc::new(LiveDbfsApi::new()), Arc::new(LiveLocalFiles));
    resource.configure(credential);

    let store = StateStore::new(&StateStore::default_root());
    let existing = store.load(local_path)?;

    let plan = DbfsFileModel {
        adb_id: settings.adb_id.clone(),
        token: settings.token.clone(),
        local_path: local_path.to_path_buf(),
        content_md5: content_md5.to_string(),
        ..DbfsFileModel::default()
    };

    let mut diags = Diagnostics::new();
    let state = if existing.is_some() {
        resource.update(&plan, &mut diags).await
    } else {
        resource.create(&plan, &mut diags).await
    };
    if diags.has_errors() {
        return Err(diags.to_string());
    }
    let state = state.ok_or_else(|| "push produced no state".to_string())?;

    store.save(&state)?;
    println!(
        "pushed {} -> {} ({} bytes, modified {})",
        local_path.display(),
        state.dbfs_path,
        state.file_size,
        state.modification_time
    );
    Ok(())
}
