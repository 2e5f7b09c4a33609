//! DBFS directory listing data source.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::dbfs::api::ListResponse;
use crate::dbfs::time::millis_to_rfc3339;
use crate::diagnostics::Diagnostics;
use crate::lifecycle::DataSource;
use crate::ports::dbfs::{DbfsApi, DbfsApiError};
use crate::provider::ClientSecretCredential;

/// Configuration for a listing read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbfsListConfig {
    /// URL of the Databricks workspace.
    pub adb_id: String,
    /// Bearer token for the workspace API.
    pub token: String,
    /// DBFS directory to list.
    pub root_path: String,
}

/// One entry of the produced listing, with the modification time already
/// converted to an RFC3339 UTC string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbfsEntry {
    /// DBFS path of the entry.
    pub path: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Size in bytes.
    pub file_size: i64,
    /// Last modification time as RFC3339 UTC.
    pub modification_time: String,
}

/// Computed output of a listing read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbfsListOutput {
    /// Entries directly under the listed path.
    pub files: Vec<DbfsEntry>,
}

/// Data source listing a DBFS directory.
pub struct DbfsListDataSource {
    api: Arc<dyn DbfsApi>,
    credential: Option<Arc<ClientSecretCredential>>,
}

impl DbfsListDataSource {
    /// Creates the data source over the given API port.
    #[must_use]
    pub fn new(api: Arc<dyn DbfsApi>) -> Self {
        Self { api, credential: None }
    }

    /// The provider credential shared at configure time, if any.
    #[must_use]
    pub fn credential(&self) -> Option<&Arc<ClientSecretCredential>> {
        self.credential.as_ref()
    }
}

#[async_trait]
impl DataSource for DbfsListDataSource {
    type Config = DbfsListConfig;
    type Output = DbfsListOutput;

    fn configure(&mut self, credential: Arc<ClientSecretCredential>) {
        self.credential = Some(credential);
    }

    async fn read(&self, config: &Self::Config, diags: &mut Diagnostics) -> Option<Self::Output> {
        let listing =
            match self.api.list(&config.adb_id, &config.token, &config.root_path).await {
                Ok(listing) => listing,
                Err(err @ DbfsApiError::Decode(_)) => {
                    diags.add_error(
                        "Error reading DBFS listing",
                        format!("Could not decode the DBFS list response: {err}"),
                    );
                    return None;
                }
                // Transport and body-read failures are swallowed; the read
                // proceeds with an empty listing.
                Err(err) => {
                    warn!(path = %config.root_path, %err, "DBFS list failed, using empty listing");
                    ListResponse::default()
                }
            };

        let files = listing
            .files
            .into_iter()
            .map(|entry| DbfsEntry {
                path: entry.path,
                is_dir: entry.is_dir,
                file_size: entry.file_size,
                modification_time: millis_to_rfc3339(entry.modification_time),
            })
            .collect();

        Some(DbfsListOutput { files })
    }
}
