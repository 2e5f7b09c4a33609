//! DBFS file lifecycle resource.
//!
//! Mirrors a single local file to the managed DBFS prefix. Create and Update
//! run the same sequence: upload the file, query its remote status, persist
//! {remote path, size, mtime}. Read only re-queries status; it does not
//! compare the stored content hash against the live file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dbfs::api::{DeleteRequest, FileStatus, PutRequest};
use crate::dbfs::path::remote_path;
use crate::dbfs::time::millis_to_rfc3339;
use crate::diagnostics::Diagnostics;
use crate::lifecycle::ManagedResource;
use crate::ports::dbfs::DbfsApi;
use crate::ports::files::LocalFiles;
use crate::provider::ClientSecretCredential;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Plan and persisted state of one managed DBFS file.
///
/// `dbfs_path`, `file_size`, and `modification_time` are computed; everything
/// else is supplied by configuration. `content_md5` is stored as given and
/// never verified against the live file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbfsFileModel {
    /// URL of the Databricks workspace.
    pub adb_id: String,
    /// Bearer token for the workspace API.
    pub token: String,
    /// Local file to mirror.
    pub local_path: PathBuf,
    /// Computed remote path under the managed prefix.
    #[serde(default)]
    pub dbfs_path: String,
    /// Remote size in bytes.
    #[serde(default)]
    pub file_size: i64,
    /// Remote last-modified time as RFC3339 UTC.
    #[serde(default)]
    pub modification_time: String,
    /// Caller-supplied md5 of the file contents.
    #[serde(default)]
    pub content_md5: String,
}

/// Resource managing one file's remote mirror in DBFS.
pub struct DbfsFileResource {
    api: Arc<dyn DbfsApi>,
    files: Arc<dyn LocalFiles>,
    credential: Option<Arc<ClientSecretCredential>>,
}

impl DbfsFileResource {
    /// Creates the resource over the given API and filesystem ports.
    #[must_use]
    pub fn new(api: Arc<dyn DbfsApi>, files: Arc<dyn LocalFiles>) -> Self {
        Self { api, files, credential: None }
    }

    /// The provider credential shared at configure time, if any.
    #[must_use]
    pub fn credential(&self) -> Option<&Arc<ClientSecretCredential>> {
        self.credential.as_ref()
    }

    /// Uploads the local file to its derived remote path.
    ///
    /// Returns `Ok(true)` only when the API answered HTTP 200. HTTP and
    /// transport failures uniformly yield `Ok(false)`; only local I/O
    /// failures surface as errors.
    async fn upload(&self, local: &Path, base: &str, token: &str) -> Result<bool, BoxError> {
        let meta = self.files.metadata(local)?;
        let contents = self.files.read(local)?;
        let request = PutRequest::overwriting(remote_path(&meta.name), BASE64.encode(contents));
        match self.api.put(base, token, &request).await {
            Ok(uploaded) => Ok(uploaded),
            Err(err) => {
                warn!(path = %request.path, %err, "DBFS put failed");
                Ok(false)
            }
        }
    }

    /// Queries the remote status of the local file's derived remote path.
    ///
    /// Any request, read, or decode failure is an error; no partial result
    /// is returned.
    async fn status(&self, local: &Path, base: &str, token: &str) -> Result<FileStatus, BoxError> {
        let meta = self.files.metadata(local).map_err(|_| "file read failed")?;
        Ok(self.api.get_status(base, token, &remote_path(&meta.name)).await?)
    }

    /// Deletes the remote mirror of the local file.
    ///
    /// The local stat runs first, so a missing local file fails before any
    /// network call. A non-200 response or transport failure is an error.
    async fn remove(&self, local: &Path, base: &str, token: &str) -> Result<(), BoxError> {
        let meta = self.files.metadata(local)?;
        let request = DeleteRequest { path: remote_path(&meta.name), recursive: false };
        let deleted =
            self.api.delete(base, token, &request).await.map_err(|_| "api call failed")?;
        if deleted {
            Ok(())
        } else {
            Err("api call failed".into())
        }
    }

    /// Shared Create/Update sequence: upload, then status, then fold the
    /// status into a fresh copy of the plan.
    ///
    /// Upload failures are logged and do not stop the sequence; a failed
    /// status query folds in a zero-value status (empty path, size 0,
    /// epoch mtime).
    async fn push(&self, plan: &DbfsFileModel) -> DbfsFileModel {
        if let Err(err) = self.upload(&plan.local_path, &plan.adb_id, &plan.token).await {
            warn!(local = %plan.local_path.display(), %err, "DBFS upload failed");
        }
        let status = self.fetch_status_or_default(plan).await;
        let mut next = plan.clone();
        apply_status(&mut next, &status);
        next
    }

    async fn fetch_status_or_default(&self, model: &DbfsFileModel) -> FileStatus {
        match self.status(&model.local_path, &model.adb_id, &model.token).await {
            Ok(status) => status,
            Err(err) => {
                warn!(local = %model.local_path.display(), %err, "DBFS status query failed");
                FileStatus::default()
            }
        }
    }
}

/// Copies the computed fields of a status response into the model.
fn apply_status(model: &mut DbfsFileModel, status: &FileStatus) {
    model.dbfs_path = status.path.clone();
    model.file_size = status.file_size;
    model.modification_time = millis_to_rfc3339(status.modification_time);
}

#[async_trait]
impl ManagedResource for DbfsFileResource {
    type Model = DbfsFileModel;

    fn configure(&mut self, credential: Arc<ClientSecretCredential>) {
        self.credential = Some(credential);
    }

    async fn create(&self, plan: &Self::Model, _diags: &mut Diagnostics) -> Option<Self::Model> {
        Some(self.push(plan).await)
    }

    async fn read(&self, state: &Self::Model, _diags: &mut Diagnostics) -> Option<Self::Model> {
        let status = self.fetch_status_or_default(state).await;
        let mut next = state.clone();
        apply_status(&mut next, &status);
        Some(next)
    }

    async fn update(&self, plan: &Self::Model, _diags: &mut Diagnostics) -> Option<Self::Model> {
        Some(self.push(plan).await)
    }

    async fn delete(&self, state: &Self::Model, diags: &mut Diagnostics) {
        if let Err(err) = self.remove(&state.local_path, &state.adb_id, &state.token).await {
            diags.add_error(
                "DBFS delete failed",
                format!("Could not delete the remote mirror of {}: {err}", state.local_path.display()),
            );
        }
    }
}
