//! `dbfsctl list` command.

use std::sync::Arc;

use crate::adapters::live::LiveDbfsApi;
use crate::commands::HostSettings;
use crate::datasource::{DbfsListConfig, DbfsListDataSource};
use crate::diagnostics::Diagnostics;
use crate::lifecycle::DataSource as _;
use crate::provider::ClientSecretCredential;

/// Lists a DBFS directory and prints one entry per line.
///
/// # Errors
///
/// Returns an error string when the read reports blocking diagnostics.
pub async fn run(
    settings: &HostSettings,
    credential: Arc<ClientSecretCredential>,
    path: &str,
) -> Result<(), String> {
    let mut source = DbfsListDataSource::new(Arc::new(LiveDbfsApi::new()));
    source.configure(credential);

    let config = DbfsListConfig {
        adb_id: settings.adb_id.clone(),
        token: settings.token.clone(),
        root_path: path.to_string(),
    };

    let mut diags = Diagnostics::new();
    let output = source.read(&config, &mut diags).await;
    if diags.has_errors() {
        return Err(diags.to_string());
    }
    let output = output.ok_or_else(|| "listing produced no result".to_string())?;

    for entry in &output.files {
        let kind = if entry.is_dir { "dir " } else { "file" };
        println!("{kind}  {:>12}  {}  {}", entry.file_size, entry.modification_time, entry.path);
    }
    Ok(())
}
