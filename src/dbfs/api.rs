//! Request and response bodies for the DBFS REST API (`/api/2.0/dbfs`).

use serde::{Deserialize, Serialize};

/// Status of a single DBFS entry as returned by `get-status` and `list`.
///
/// `modification_time` is epoch milliseconds on the wire; conversion to an
/// RFC3339 string happens when the value is copied into managed state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStatus {
    /// Absolute DBFS path of the entry.
    pub path: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Size in bytes; zero for directories.
    pub file_size: i64,
    /// Last modification time in epoch milliseconds.
    pub modification_time: i64,
}

/// Response body of `GET /api/2.0/dbfs/list`.
///
/// The API omits `files` entirely for an empty directory, so the field
/// defaults to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListResponse {
    /// Entries directly under the listed path.
    pub files: Vec<FileStatus>,
}

/// Request body of `POST /api/2.0/dbfs/put`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PutRequest {
    /// Destination DBFS path.
    pub path: String,
    /// Base64-encoded file contents.
    pub contents: String,
    /// Whether to replace an existing file. The API accepts this as the
    /// string `"true"`, not a JSON boolean.
    pub overwrite: String,
}

impl PutRequest {
    /// Builds an overwriting put request for the given path and encoded
    /// contents.
    #[must_use]
    pub fn overwriting(path: String, contents: String) -> Self {
        Self { path, contents, overwrite: "true".to_string() }
    }
}

/// Request body of `POST /api/2.0/dbfs/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    /// DBFS path to delete.
    pub path: String,
    /// Whether to delete directories recursively. Always `false` here; the
    /// managed entries are plain files.
    pub recursive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_decodes_entries() {
        let body = r#"{
            "files": [
                {"path": "/FileStore/a.jar", "is_dir": false, "file_size": 10, "modification_time": 1700000000000},
                {"path": "/FileStore/sub", "is_dir": true, "file_size": 0, "modification_time": 0}
            ]
        }"#;
        let response: ListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.files.len(), 2);
        assert_eq!(response.files[0].path, "/FileStore/a.jar");
        assert_eq!(response.files[0].modification_time, 1_700_000_000_000);
        assert!(response.files[1].is_dir);
    }

    #[test]
    fn list_response_without_files_key_is_empty() {
        let response: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.files.is_empty());
    }

    #[test]
    fn file_status_tolerates_missing_fields() {
        let status: FileStatus = serde_json::from_str(r#"{"path": "/x"}"#).unwrap();
        assert_eq!(status.path, "/x");
        assert!(!status.is_dir);
        assert_eq!(status.file_size, 0);
    }

    #[test]
    fn put_request_serializes_overwrite_as_string() {
        let request = PutRequest::overwriting("/FileStore/a".into(), "YQ==".into());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["overwrite"], "true");
        assert_eq!(json["contents"], "YQ==");
    }

    #[test]
    fn delete_request_is_non_recursive() {
        let request = DeleteRequest { path: "/FileStore/a".into(), recursive: false };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["recursive"], false);
    }
}
