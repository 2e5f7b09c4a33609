//! DBFS REST API port.

use async_trait::async_trait;
use thiserror::Error;

use crate::dbfs::api::{DeleteRequest, FileStatus, ListResponse, PutRequest};

/// Errors from a DBFS API call.
///
/// The decode case is kept separate from transport failures because callers
/// treat them differently: a body that fails to decode is reported as a
/// diagnostic, while transport failures are logged and swallowed on the
/// best-effort paths.
#[derive(Debug, Error)]
pub enum DbfsApiError {
    /// The HTTP request could not be sent or completed.
    #[error("request call failed: {0}")]
    Transport(String),
    /// The response body could not be read.
    #[error("read response body failed: {0}")]
    Body(String),
    /// The response body was not the expected JSON shape.
    #[error("unmarshal failed: {0}")]
    Decode(String),
}

/// Issues calls against the DBFS REST API of a Databricks workspace.
///
/// `base` is the workspace URL (e.g. `https://adb-123.azuredatabricks.net`);
/// every call attaches `Authorization: Bearer {token}`.
#[async_trait]
pub trait DbfsApi: Send + Sync {
    /// Lists the entries directly under `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request, body read, or JSON decode fails.
    async fn list(
        &self,
        base: &str,
        token: &str,
        path: &str,
    ) -> Result<ListResponse, DbfsApiError>;

    /// Uploads a file. Returns `Ok(true)` only when the API answered
    /// HTTP 200; any other status is `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request could not be sent at all.
    async fn put(&self, base: &str, token: &str, request: &PutRequest)
        -> Result<bool, DbfsApiError>;

    /// Fetches the status of the entry at `remote_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request, body read, or JSON decode fails.
    async fn get_status(
        &self,
        base: &str,
        token: &str,
        remote_path: &str,
    ) -> Result<FileStatus, DbfsApiError>;

    /// Deletes the entry named in `request`. Returns `Ok(true)` only on
    /// HTTP 200.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent.
    async fn delete(
        &self,
        base: &str,
        token: &str,
        request: &DeleteRequest,
    ) -> Result<bool, DbfsApiError>;
}
