//! `dbfsctl refresh` command.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{LiveDbfsApi, LiveLocalFiles};
use crate::commands::HostSettings;
use crate::diagnostics::Diagnostics;
use crate::lifecycle::ManagedResource as _;
use crate::provider::ClientSecretCredential;
use crate::resource::DbfsFileResource;
use crate::store::StateStore;

/// Re-queries the remote status of a pushed file and refreshes its state
/// record.
///
/// # Errors
///
/// Returns an error string when no state record exists for the file or the
/// lifecycle reports blocking diagnostics.
pub async fn run(
    settings: &HostSettings,
    credential: Arc<ClientSecretCredential>,
    local_path: &Path,
) -> Result<(), String> {
    let mut resource = DbfsFileResource::new(Arc::new(LiveDbfsApi::new()), Arc::new(LiveLocalFiles));
    resource.configure(credential);

    let store = StateStore::new(&StateStore::default_root());
    let mut state = store
        .load(local_path)?
        .ok_or_else(|| format!("no state for {}; push it first", local_path.display()))?;
    // The workspace may have rotated since the record was written.
    state.adb_id = settings.adb_id.clone();
    state.token = settings.token.clone();

    let mut diags = Diagnostics::new();
    let refreshed = resource.read(&state, &mut diags).await;
    if diags.has_errors() {
        return Err(diags.to_string());
    }
    let refreshed = refreshed.ok_or_else(|| "refresh produced no state".to_string())?;

    store.save(&refreshed)?;
    println!(
        "{} ({} bytes, modified {})",
        refreshed.dbfs_path, refreshed.file_size, refreshed.modification_time
    );
    Ok(())
}
