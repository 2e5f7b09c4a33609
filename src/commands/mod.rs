//! Command dispatch and handlers.
//!
//! The command layer is the "host" side of the lifecycle: it validates the
//! provider configuration, wires live adapters into the data source and
//! resource, invokes the lifecycle methods, and persists state between
//! invocations.

pub mod list;
pub mod push;
pub mod refresh;
pub mod remove;

use std::env;
use std::sync::Arc;

use crate::cli::Command;
use crate::diagnostics::Diagnostics;
use crate::provider::{ClientSecretCredential, ConfigValue, Provider, ProviderModel};

/// Workspace settings the host supplies to every lifecycle call.
pub struct HostSettings {
    /// URL of the Databricks workspace.
    pub adb_id: String,
    /// Bearer token for the workspace API.
    pub token: String,
}

/// Provider credential attributes plus workspace settings, read from the
/// environment (a `.env` file is honored when present).
///
/// # Errors
///
/// Returns an error string when a required variable is unset.
fn settings_from_env() -> Result<(ProviderModel, HostSettings), String> {
    dotenvy::dotenv().ok();

    let value = |name: &str| ConfigValue::from(env::var(name).ok());
    let model = ProviderModel {
        clientid: value("DBFS_CLIENT_ID"),
        clientsecret: value("DBFS_CLIENT_SECRET"),
        subscriptionid: value("DBFS_SUBSCRIPTION_ID"),
        tenantid: value("DBFS_TENANT_ID"),
    };

    let adb_id = env::var("DBFS_ADB_ID").map_err(|_| "DBFS_ADB_ID is not set".to_string())?;
    let token = env::var("DBFS_TOKEN").map_err(|_| "DBFS_TOKEN is not set".to_string())?;

    Ok((model, HostSettings { adb_id, token }))
}

/// Configures the provider from the environment and dispatches a parsed
/// command to its handler.
///
/// # Errors
///
/// Returns an error string when configuration fails or the handler reports
/// blocking diagnostics.
pub async fn dispatch(command: &Command) -> Result<(), String> {
    let (model, settings) = settings_from_env()?;

    let mut diags = Diagnostics::new();
    let provider = Provider::new(env!("CARGO_PKG_VERSION"));
    let Some(credential) = provider.configure(&model, &mut diags) else {
        return Err(diags.to_string());
    };

    dispatch_with(command, &settings, credential).await
}

async fn dispatch_with(
    command: &Command,
    settings: &HostSettings,
    credential: Arc<ClientSecretCredential>,
) -> Result<(), String> {
    match command {
        Command::List { path } => list::run(settings, credential, path).await,
        Command::Push { local_path, content_md5 } => {
            push::run(settings, credential, local_path, content_md5).await
        }
        Command::Refresh { local_path } => refresh::run(settings, credential, local_path).await,
        Command::Remove { local_path } => remove::run(settings, credential, local_path).await,
    }
}
