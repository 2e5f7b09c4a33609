//! Live adapter for the [`DbfsApi`] port using `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::dbfs::api::{DeleteRequest, FileStatus, ListResponse, PutRequest};
use crate::ports::dbfs::{DbfsApi, DbfsApiError};

/// Live DBFS client issuing real HTTP calls against a workspace.
pub struct LiveDbfsApi {
    client: Client,
}

impl LiveDbfsApi {
    /// Creates a new live DBFS client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// GETs `url` with bearer auth and decodes the JSON body into `T`.
    ///
    /// The status code is deliberately not checked here: error bodies fail
    /// the decode instead, which the callers report as decode diagnostics.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
    ) -> Result<T, DbfsApiError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DbfsApiError::Transport(e.to_string()))?;
        let body = response.text().await.map_err(|e| DbfsApiError::Body(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| DbfsApiError::Decode(e.to_string()))
    }

    /// POSTs `body` as JSON with bearer auth; reports whether the API
    /// answered HTTP 200.
    async fn post_json<B: serde::Serialize + Sync>(
        &self,
        url: &str,
        token: &str,
        body: &B,
    ) -> Result<bool, DbfsApiError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| DbfsApiError::Transport(e.to_string()))?;
        Ok(response.status() == StatusCode::OK)
    }
}

impl Default for LiveDbfsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DbfsApi for LiveDbfsApi {
    async fn list(
        &self,
        base: &str,
        token: &str,
        path: &str,
    ) -> Result<ListResponse, DbfsApiError> {
        let url = format!("{base}/api/2.0/dbfs/list?path={path}");
        self.get_json(&url, token).await
    }

    async fn put(
        &self,
        base: &str,
        token: &str,
        request: &PutRequest,
    ) -> Result<bool, DbfsApiError> {
        let url = format!("{base}/api/2.0/dbfs/put");
        self.post_json(&url, token, request).await
    }

    async fn get_status(
        &self,
        base: &str,
        token: &str,
        remote_path: &str,
    ) -> Result<FileStatus, DbfsApiError> {
        let url = format!("{base}/api/2.0/dbfs/get-status?path={remote_path}");
        self.get_json(&url, token).await
    }

    async fn delete(
        &self,
        base: &str,
        token: &str,
        request: &DeleteRequest,
    ) -> Result<bool, DbfsApiError> {
        let url = format!("{base}/api/2.0/dbfs/delete");
        self.post_json(&url, token, request).await
    }
}
