//! `dbfsctl remove` command.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{LiveDbfsApi, LiveLocalFiles};
use crate::commands::HostSettings;
use crate::diagnostics::Diagnostics;
use crate::lifecycle::ManagedResource as _;
use crate::provider::ClientSecretCredential;
use crate::resource::DbfsFileResource;
use crate::store::StateStore;

/// Deletes the remote mirror of a pushed file and drops its state record.
///
/// # Errors
///
/// Returns an error string when no state record exists or the delete reports
/// blocking diagnostics; the state record is kept on failure.
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
        .ok_or_else(|| format!("no state for {}; nothing to remove", local_path.display()))?;
    state.adb_id = settings.adb_id.clone();
    state.token = settings.token.clone();

    let mut diags = Diagnostics::new();
    resource.delete(&state, &mut diags).await;
    if diags.has_errors() {
        return Err(diags.to_string());
    }

    store.remove(local_path)?;
    println!("removed {}", state.dbfs_path);
    Ok(())
}
